use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{user, work_order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_order_assignee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub work_order_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub assigned_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    WorkOrder,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::WorkOrder => Entity::belongs_to(work_order::Entity)
                .from(Column::WorkOrderId)
                .to(work_order::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<work_order::Entity> for Entity {
    fn to() -> RelationDef { Relation::WorkOrder.def() }
}

impl ActiveModelBehavior for ActiveModel {}
