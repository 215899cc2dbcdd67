use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors;
use crate::organization;

pub const ROLES: [&str; 4] = ["admin", "manager", "technician", "member"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Organization => Entity::belongs_to(organization::Entity).from(Column::OrganizationId).to(organization::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateUser {
    pub organization_id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub role: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateUser {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub role: Option<String>,
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<String, errors::ModelError> {
    let lower = role.to_ascii_lowercase();
    if !ROLES.contains(&lower.as_str()) {
        return Err(errors::ModelError::Validation(format!("role must be one of {}", ROLES.join(", "))));
    }
    Ok(lower)
}

impl CreateUser {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        validate_email(&self.email)?;
        validate_name(&self.name)?;
        let role = validate_role(self.role.as_deref().unwrap_or("member"))?;
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            email: Set(self.email.to_ascii_lowercase()),
            name: Set(self.name),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateUser {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(email) = self.email {
            validate_email(&email)?;
            am.email = Set(email.to_ascii_lowercase());
        }
        if let Some(name) = self.name {
            validate_name(&name)?;
            am.name = Set(name);
        }
        if let Some(role) = self.role { am.role = Set(validate_role(&role)?); }
        Ok(())
    }
}
