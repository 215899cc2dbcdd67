use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors, organization, work_order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attachment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub files: Json,
    pub work_order_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    WorkOrder,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
            Relation::WorkOrder => Entity::belongs_to(work_order::Entity)
                .from(Column::WorkOrderId)
                .to(work_order::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Reference to an uploaded file. Upload itself is handled elsewhere.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
pub struct FileRef {
    #[validate(url)]
    pub url: String,
    #[validate(length(max = 256))]
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateAttachment {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
    pub work_order_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateAttachment {
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    pub files: Option<Vec<FileRef>>,
    pub work_order_id: Option<Uuid>,
}

fn files_json(files: &[FileRef]) -> Result<Json, errors::ModelError> {
    for f in files {
        f.validate().map_err(|e| errors::ModelError::Validation(e.to_string()))?;
    }
    serde_json::to_value(files).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

impl CreateAttachment {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            files: Set(files_json(&self.files)?),
            name: Set(self.name),
            work_order_id: Set(self.work_order_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateAttachment {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(files) = self.files { am.files = Set(files_json(&files)?); }
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.work_order_id { am.work_order_id = Set(Some(v)); }
        Ok(())
    }
}
