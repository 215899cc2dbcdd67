//! Scheduled reminders, picked up by the reminder sweep once due.
use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{dates, errors, organization, user, work_order};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reminder")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub work_order_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub message: String,
    pub fire_at: DateTimeWithTimeZone,
    pub status: ReminderStatus,
    pub attempts: i32,
    pub last_error: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
    WorkOrder,
    User,
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
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateReminder {
    pub organization_id: Uuid,
    pub work_order_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub fire_at: String,
}

/// Reschedule or reword a reminder. A new `fire_at` on a `failed` reminder
/// puts it back to `pending`; a `sent` reminder stays `sent`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateReminder {
    pub work_order_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, max = 2000))]
    pub message: Option<String>,
    pub fire_at: Option<String>,
}

impl CreateReminder {
    pub fn into_active(self, id: Uuid, now: DateTimeWithTimeZone) -> Result<ActiveModel, errors::ModelError> {
        let fire_at = dates::parse_due_date(&self.fire_at)
            .map_err(|_| errors::ModelError::Validation(format!("fire_at: invalid date '{}'", self.fire_at)))?;
        Ok(ActiveModel {
            id: Set(id),
            organization_id: Set(self.organization_id),
            work_order_id: Set(self.work_order_id),
            user_id: Set(self.user_id),
            message: Set(self.message),
            fire_at: Set(fire_at),
            status: Set(ReminderStatus::Pending),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl UpdateReminder {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(raw) = self.fire_at {
            let fire_at = dates::parse_due_date(&raw)
                .map_err(|_| errors::ModelError::Validation(format!("fire_at: invalid date '{raw}'")))?;
            am.fire_at = Set(fire_at);
            if matches!(am.status, ActiveValue::Unchanged(ReminderStatus::Failed) | ActiveValue::Set(ReminderStatus::Failed)) {
                am.status = Set(ReminderStatus::Pending);
            }
        }
        if let Some(v) = self.message { am.message = Set(v); }
        if let Some(v) = self.work_order_id { am.work_order_id = Set(Some(v)); }
        if let Some(v) = self.user_id { am.user_id = Set(Some(v)); }
        Ok(())
    }
}
