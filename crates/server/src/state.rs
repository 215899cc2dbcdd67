use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::notification::NotificationStore;

/// Handles built once at startup and shared by every route.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub notifications: Arc<NotificationStore>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, notifications: NotificationStore::new() }
    }
}
