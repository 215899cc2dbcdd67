use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use models::reminder;
use crate::{
    crud::CrudService,
    notification::{CreateNotification, NotificationStore},
};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivers one due reminder.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, reminder: &reminder::Model) -> Result<(), NotifyError>;
}

/// Writes a notification record into the in-memory notification store.
#[derive(Clone)]
pub struct StoreNotifier {
    store: Arc<NotificationStore>,
}

impl StoreNotifier {
    pub fn new(store: Arc<NotificationStore>) -> Self { Self { store } }
}

#[async_trait]
impl Notifier for StoreNotifier {
    async fn notify(&self, reminder: &reminder::Model) -> Result<(), NotifyError> {
        let created = self
            .store
            .create(CreateNotification {
                organization_id: reminder.organization_id,
                user_id: reminder.user_id,
                reminder_id: Some(reminder.id),
                title: "Reminder".into(),
                body: reminder.message.clone(),
            })
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        info!(event = "reminder_dispatched", reminder_id = %reminder.id, notification_id = %created.id);
        Ok(())
    }
}
