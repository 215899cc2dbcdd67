use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, user, work_order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_order_comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub author_id: Option<Uuid>,
    pub body: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    WorkOrder,
    Author,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::WorkOrder => Entity::belongs_to(work_order::Entity)
                .from(Column::WorkOrderId)
                .to(work_order::Column::Id)
                .into(),
            Relation::Author => Entity::belongs_to(user::Entity)
                .from(Column::AuthorId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<work_order::Entity> for Entity {
    fn to() -> RelationDef { Relation::WorkOrder.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateComment {
    pub author_id: Option<Uuid>,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

impl CreateComment {
    pub fn into_active(self, id: Uuid, work_order_id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        if self.body.trim().is_empty() {
            return Err(errors::ModelError::Validation("comment body required".into()));
        }
        Ok(ActiveModel {
            id: Set(id),
            work_order_id: Set(work_order_id),
            author_id: Set(self.author_id),
            body: Set(self.body),
            created_at: Set(now),
        })
    }
}
