use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::pagination::ListQuery;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::{crud::CrudService, errors::ServiceError};

/// A record kept only in process memory.
pub trait MemoryRecord: Clone + Serialize + Send + Sync + 'static {
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Route segment, e.g. `notifications`.
    const RESOURCE: &'static str;

    fn create(input: Self::Create, id: Uuid, now: DateTime<Utc>) -> Self;
    /// Overwrite the fields present in `update`.
    fn merge(&mut self, update: Self::Update);
    fn touch(&mut self, now: DateTime<Utc>);

    fn id(&self) -> Uuid;
    fn organization_id(&self) -> Option<Uuid>;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Generic in-memory implementation of the CRUD contract.
///
/// Holds a `HashMap<Uuid, T>` behind an async `RwLock`. Nothing survives a
/// restart; share one instance through `Arc`.
///
/// # Examples
/// ```
/// use service::crud::CrudService;
/// use service::notification::{CreateNotification, NotificationStore};
/// let store = NotificationStore::new();
/// let input = CreateNotification {
///     organization_id: uuid::Uuid::new_v4(),
///     user_id: None,
///     reminder_id: None,
///     title: "PM due".into(),
///     body: String::new(),
/// };
/// let created = tokio_test::block_on(store.create(input)).unwrap();
/// let found = tokio_test::block_on(store.find_by_id(created.id)).unwrap();
/// assert_eq!(found, created);
/// ```
pub struct MemoryStore<T> {
    inner: RwLock<HashMap<Uuid, T>>,
}

impl<T: MemoryRecord> MemoryStore<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(HashMap::new()) })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl<T: MemoryRecord> CrudService for MemoryStore<T> {
    type Record = T;
    type Create = T::Create;
    type Update = T::Update;

    fn resource(&self) -> &'static str { T::RESOURCE }

    async fn find_all(&self, query: ListQuery) -> Result<Vec<T>, ServiceError> {
        let map = self.inner.read().await;
        let mut items: Vec<T> = map
            .values()
            .filter(|r| query.organization_id.is_none() || r.organization_id() == query.organization_id)
            .cloned()
            .collect();
        drop(map);
        items.sort_by(|a, b| a.created_at().cmp(&b.created_at()).then(a.id().cmp(&b.id())));
        if let Some(p) = query.pagination() {
            let (page_idx, per_page) = p.normalize();
            let skip = usize::try_from(page_idx.saturating_mul(per_page)).unwrap_or(usize::MAX);
            let take = usize::try_from(per_page).unwrap_or(usize::MAX);
            items = items.into_iter().skip(skip).take(take).collect();
        }
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<T, ServiceError> {
        let map = self.inner.read().await;
        map.get(&id).cloned().ok_or_else(|| ServiceError::not_found(T::RESOURCE))
    }

    async fn create(&self, input: T::Create) -> Result<T, ServiceError> {
        let id = Uuid::new_v4();
        let record = T::create(input, id, Utc::now());
        let mut map = self.inner.write().await;
        map.insert(id, record.clone());
        debug!(event = "memory_record_created", resource = T::RESOURCE, id = %id);
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: T::Update) -> Result<T, ServiceError> {
        let mut map = self.inner.write().await;
        let record = map.get_mut(&id).ok_or_else(|| ServiceError::not_found(T::RESOURCE))?;
        record.merge(input);
        record.touch(Utc::now());
        Ok(record.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<T, ServiceError> {
        let mut map = self.inner.write().await;
        map.remove(&id).ok_or_else(|| ServiceError::not_found(T::RESOURCE))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde::Deserialize;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Note {
        id: Uuid,
        organization_id: Uuid,
        text: String,
        pinned: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    #[derive(Deserialize, Validate)]
    struct NewNote {
        organization_id: Uuid,
        #[validate(length(min = 1))]
        text: String,
    }

    #[derive(Default, Deserialize, Validate)]
    struct NoteChanges {
        text: Option<String>,
        pinned: Option<bool>,
    }

    impl MemoryRecord for Note {
        type Create = NewNote;
        type Update = NoteChanges;
        const RESOURCE: &'static str = "notes";

        fn create(input: NewNote, id: Uuid, now: DateTime<Utc>) -> Self {
            Note { id, organization_id: input.organization_id, text: input.text, pinned: false, created_at: now, updated_at: now }
        }
        fn merge(&mut self, update: NoteChanges) {
            if let Some(t) = update.text { self.text = t; }
            if let Some(p) = update.pinned { self.pinned = p; }
        }
        fn touch(&mut self, now: DateTime<Utc>) { self.updated_at = now; }
        fn id(&self) -> Uuid { self.id }
        fn organization_id(&self) -> Option<Uuid> { Some(self.organization_id) }
        fn created_at(&self) -> DateTime<Utc> { self.created_at }
    }

    #[tokio::test]
    async fn memory_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Note>::new();
        let org = Uuid::new_v4();

        assert!(store.is_empty().await);
        let n = store.create(NewNote { organization_id: org, text: "oil pump".into() }).await?;
        assert_eq!(n.created_at, n.updated_at);
        assert_eq!(store.find_by_id(n.id).await?, n);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let merged = store.update(n.id, NoteChanges { pinned: Some(true), ..Default::default() }).await?;
        assert!(merged.pinned);
        assert_eq!(merged.text, "oil pump");
        assert!(merged.updated_at > n.updated_at);

        let removed = store.remove(n.id).await?;
        assert_eq!(removed, merged);
        assert!(matches!(store.find_by_id(n.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.remove(n.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update(n.id, NoteChanges::default()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn memory_store_lists_in_creation_order_with_filters() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Note>::new();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        for i in 0..5 {
            store.create(NewNote { organization_id: a, text: format!("a{i}") }).await?;
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        store.create(NewNote { organization_id: b, text: "b".into() }).await?;
        assert_eq!(store.len().await, 6);

        let all_a = store.find_all(ListQuery::for_organization(a)).await?;
        let texts: Vec<_> = all_a.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["a0", "a1", "a2", "a3", "a4"]);

        let page = store
            .find_all(ListQuery { organization_id: Some(a), page: Some(2), per_page: Some(2) })
            .await?;
        let texts: Vec<_> = page.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["a2", "a3"]);
        Ok(())
    }
}
