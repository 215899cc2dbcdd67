use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{asset, errors, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub asset_id: Option<Uuid>,
    pub name: String,
    pub unit: String,
    pub last_reading: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    Asset,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
            Relation::Asset => Entity::belongs_to(asset::Entity)
                .from(Column::AssetId)
                .to(asset::Column::Id)
                .into(),
        }
    }
}

impl Related<asset::Entity> for Entity {
    fn to() -> RelationDef { Relation::Asset.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateMeter {
    pub organization_id: Uuid,
    pub asset_id: Option<Uuid>,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub unit: String,
    pub last_reading: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateMeter {
    pub asset_id: Option<Uuid>,
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub unit: Option<String>,
    pub last_reading: Option<f64>,
}

fn check_reading(v: f64) -> Result<f64, errors::ModelError> {
    if !v.is_finite() { return Err(errors::ModelError::Validation("last_reading must be finite".into())); }
    Ok(v)
}

impl CreateMeter {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        let last_reading = self.last_reading.map(check_reading).transpose()?;
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            asset_id: Set(self.asset_id),
            name: Set(self.name),
            unit: Set(self.unit),
            last_reading: Set(last_reading),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateMeter {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.last_reading { am.last_reading = Set(Some(check_reading(v)?)); }
        if let Some(v) = self.asset_id { am.asset_id = Set(Some(v)); }
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.unit { am.unit = Set(v); }
        Ok(())
    }
}
