use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub contact: Option<Json>,
    pub address: Option<String>,
    pub website: Option<String>,
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
pub struct CreateVendor {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub contact: Option<Json>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateVendor {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    pub contact: Option<Json>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

impl CreateVendor {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            name: Set(self.name),
            contact: Set(self.contact),
            address: Set(self.address),
            website: Set(self.website),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateVendor {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.contact { am.contact = Set(Some(v)); }
        if let Some(v) = self.address { am.address = Set(Some(v)); }
        if let Some(v) = self.website { am.website = Set(Some(v)); }
        Ok(())
    }
}
