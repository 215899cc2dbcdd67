use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Organization }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateLocation {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(max = 512))]
    pub address: Option<String>,
    pub parent_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateLocation {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
    pub parent_id: Option<Uuid>,
}

impl CreateLocation {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        if self.parent_id == Some(id) {
            return Err(errors::ModelError::Validation("location cannot be its own parent".into()));
        }
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            name: Set(self.name),
            address: Set(self.address),
            parent_id: Set(self.parent_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateLocation {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(parent) = self.parent_id {
            if am.id.as_ref() == &parent {
                return Err(errors::ModelError::Validation("location cannot be its own parent".into()));
            }
            am.parent_id = Set(Some(parent));
        }
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.address { am.address = Set(Some(v)); }
        Ok(())
    }
}
