use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, organization};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procedure")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub steps: Json,
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

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
pub struct ProcedureStep {
    #[validate(length(min = 1, max = 512))]
    pub title: String,
    pub details: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateProcedure {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<ProcedureStep>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateProcedure {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<ProcedureStep>>,
}

fn steps_json(steps: &[ProcedureStep]) -> Result<Json, errors::ModelError> {
    if steps.iter().any(|s| s.title.trim().is_empty()) {
        return Err(errors::ModelError::Validation("step title required".into()));
    }
    serde_json::to_value(steps).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

impl CreateProcedure {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            steps: Set(steps_json(&self.steps)?),
            name: Set(self.name),
            description: Set(self.description),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateProcedure {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(steps) = self.steps { am.steps = Set(steps_json(&steps)?); }
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        Ok(())
    }
}
