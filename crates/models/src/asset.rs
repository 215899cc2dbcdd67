use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{category, errors, location, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub location_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    Location,
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
            Relation::Location => Entity::belongs_to(location::Entity)
                .from(Column::LocationId)
                .to(location::Column::Id)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef { Relation::Location.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateAsset {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 128))]
    pub serial_number: Option<String>,
    pub location_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateAsset {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 128))]
    pub serial_number: Option<String>,
    pub location_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

impl CreateAsset {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            name: Set(self.name),
            description: Set(self.description),
            serial_number: Set(self.serial_number),
            location_id: Set(self.location_id),
            category_id: Set(self.category_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateAsset {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        if let Some(v) = self.serial_number { am.serial_number = Set(Some(v)); }
        if let Some(v) = self.location_id { am.location_id = Set(Some(v)); }
        if let Some(v) = self.category_id { am.category_id = Set(Some(v)); }
        Ok(())
    }
}
