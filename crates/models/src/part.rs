//! Inventory parts. Exposed over HTTP as `inventory`.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, location, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "part")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub quantity: i32,
    pub min_quantity: i32,
    pub unit_cost: Option<f64>,
    pub location_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    Location,
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
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreatePart {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(max = 64))]
    pub sku: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub min_quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub unit_cost: Option<f64>,
    pub location_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdatePart {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    #[validate(length(max = 64))]
    pub sku: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub min_quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub unit_cost: Option<f64>,
    pub location_id: Option<Uuid>,
}

impl Model {
    /// Stock at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool { self.quantity <= self.min_quantity }
}

impl CreatePart {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            name: Set(self.name),
            sku: Set(self.sku),
            quantity: Set(self.quantity.unwrap_or(0)),
            min_quantity: Set(self.min_quantity.unwrap_or(0)),
            unit_cost: Set(self.unit_cost),
            location_id: Set(self.location_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdatePart {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.sku { am.sku = Set(Some(v)); }
        if let Some(v) = self.quantity { am.quantity = Set(v); }
        if let Some(v) = self.min_quantity { am.min_quantity = Set(v); }
        if let Some(v) = self.unit_cost { am.unit_cost = Set(Some(v)); }
        if let Some(v) = self.location_id { am.location_id = Set(Some(v)); }
        Ok(())
    }
}
