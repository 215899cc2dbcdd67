//! Notifications produced by the reminder sweep. Kept in memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::storage::{MemoryRecord, MemoryStore};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Option<Uuid>,
    pub reminder_id: Option<Uuid>,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateNotification {
    pub organization_id: Uuid,
    pub user_id: Option<Uuid>,
    pub reminder_id: Option<Uuid>,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateNotification {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(length(max = 4000))]
    pub body: Option<String>,
    pub read: Option<bool>,
}

impl MemoryRecord for Notification {
    type Create = CreateNotification;
    type Update = UpdateNotification;
    const RESOURCE: &'static str = "notifications";

    fn create(input: CreateNotification, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            organization_id: input.organization_id,
            user_id: input.user_id,
            reminder_id: input.reminder_id,
            title: input.title,
            body: input.body,
            read: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn merge(&mut self, update: UpdateNotification) {
        if let Some(v) = update.title { self.title = v; }
        if let Some(v) = update.body { self.body = v; }
        if let Some(v) = update.read { self.read = v; }
    }

    fn touch(&mut self, now: DateTime<Utc>) { self.updated_at = now; }
    fn id(&self) -> Uuid { self.id }
    fn organization_id(&self) -> Option<Uuid> { Some(self.organization_id) }
    fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

pub type NotificationStore = MemoryStore<Notification>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::CrudService;

    #[tokio::test]
    async fn marking_read_keeps_the_rest() -> Result<(), anyhow::Error> {
        let store = NotificationStore::new();
        let n = store
            .create(CreateNotification {
                organization_id: Uuid::new_v4(),
                user_id: None,
                reminder_id: None,
                title: "PM due".into(),
                body: "Lubricate conveyor".into(),
            })
            .await?;
        assert!(!n.read);
        let n2 = store.update(n.id, UpdateNotification { read: Some(true), ..Default::default() }).await?;
        assert!(n2.read);
        assert_eq!(n2.title, "PM due");
        assert_eq!(n2.body, "Lubricate conveyor");
        Ok(())
    }
}
