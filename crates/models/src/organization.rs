use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact: Option<Json>,
    pub address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub contact: Option<Json>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateOrganization {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub contact: Option<Json>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

impl CreateOrganization {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        validate_name(&self.name)?;
        Ok(ActiveModel {
            id: Set(id),
            name: Set(self.name.trim().to_string()),
            contact: Set(self.contact),
            address: Set(self.address),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateOrganization {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(name) = self.name {
            validate_name(&name)?;
            am.name = Set(name.trim().to_string());
        }
        if let Some(contact) = self.contact { am.contact = Set(Some(contact)); }
        if let Some(address) = self.address { am.address = Set(Some(address)); }
        Ok(())
    }
}
