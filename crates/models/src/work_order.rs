use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{asset, dates, errors, location, organization, work_order_assignee, work_order_comment};

pub const STATUSES: [&str; 4] = ["open", "in_progress", "on_hold", "complete"];
pub const PRIORITIES: [&str; 4] = ["none", "low", "medium", "high"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub asset_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    Asset,
    Location,
    Comments,
    Assignees,
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
            Relation::Location => Entity::belongs_to(location::Entity)
                .from(Column::LocationId)
                .to(location::Column::Id)
                .into(),
            Relation::Comments => Entity::has_many(work_order_comment::Entity).into(),
            Relation::Assignees => Entity::has_many(work_order_assignee::Entity).into(),
        }
    }
}

impl Related<work_order_comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comments.def() }
}

impl Related<work_order_assignee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Assignees.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateWorkOrder {
    pub organization_id: Uuid,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub asset_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub due_date: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateWorkOrder {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub asset_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub due_date: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AssignUsers {
    #[validate(length(max = 100))]
    pub user_ids: Vec<Uuid>,
}

fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<String, errors::ModelError> {
    let lower = value.to_ascii_lowercase();
    if !allowed.contains(&lower.as_str()) {
        return Err(errors::ModelError::Validation(format!("{field} must be one of {}", allowed.join(", "))));
    }
    Ok(lower)
}

pub fn validate_status(status: &str) -> Result<String, errors::ModelError> { one_of("status", status, &STATUSES) }

pub fn validate_priority(priority: &str) -> Result<String, errors::ModelError> { one_of("priority", priority, &PRIORITIES) }

impl CreateWorkOrder {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            title: Set(self.title),
            description: Set(self.description),
            status: Set(validate_status(self.status.as_deref().unwrap_or("open"))?),
            priority: Set(validate_priority(self.priority.as_deref().unwrap_or("none"))?),
            asset_id: Set(self.asset_id),
            location_id: Set(self.location_id),
            due_date: Set(dates::parse_optional(self.due_date.as_deref())?),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateWorkOrder {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.status { am.status = Set(validate_status(&v)?); }
        if let Some(v) = self.priority { am.priority = Set(validate_priority(&v)?); }
        if let Some(raw) = self.due_date { am.due_date = Set(Some(dates::parse_due_date(&raw)?)); }
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        if let Some(v) = self.asset_id { am.asset_id = Set(Some(v)); }
        if let Some(v) = self.location_id { am.location_id = Set(Some(v)); }
        Ok(())
    }
}
