//! The CRUD contract shared by every resource, and the macro that stamps out
//! its SeaORM-backed implementation for a single table.

use async_trait::async_trait;
use common::pagination::ListQuery;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;

/// Five operations every resource exposes.
///
/// Implementations own their storage handle and are shared behind `Arc`
/// by the HTTP layer, one instance per resource for the life of the process.
#[async_trait]
pub trait CrudService: Send + Sync + 'static {
    type Record: Serialize + Send + Sync + 'static;
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Route segment and log label, e.g. `work-orders`.
    fn resource(&self) -> &'static str;

    /// Oldest first. Filters by `organization_id` and pages when the query asks.
    async fn find_all(&self, query: ListQuery) -> Result<Vec<Self::Record>, ServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Self::Record, ServiceError>;

    async fn create(&self, input: Self::Create) -> Result<Self::Record, ServiceError>;

    /// Partial merge; fields absent from `input` keep their stored value.
    async fn update(&self, id: Uuid, input: Self::Update) -> Result<Self::Record, ServiceError>;

    /// Hard delete, returning the row as it was.
    async fn remove(&self, id: Uuid) -> Result<Self::Record, ServiceError>;
}

/// Implement `CrudService` for an organization-scoped table.
///
/// The entity module must expose `Model`, `ActiveModel`, `Entity` and
/// `Column::{OrganizationId, CreatedAt, UpdatedAt}`; its create payload must
/// provide `into_active(id, now)` and its update payload `apply(&mut am)`.
macro_rules! seaorm_crud_service {
    ($(#[$meta:meta])* $name:ident, $module:ident, $create:ident, $update:ident, $resource:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            db: ::sea_orm::DatabaseConnection,
        }

        impl $name {
            pub fn new(db: ::sea_orm::DatabaseConnection) -> Self { Self { db } }
        }

        #[::async_trait::async_trait]
        impl $crate::crud::CrudService for $name {
            type Record = ::models::$module::Model;
            type Create = ::models::$module::$create;
            type Update = ::models::$module::$update;

            fn resource(&self) -> &'static str { $resource }

            async fn find_all(
                &self,
                query: ::common::pagination::ListQuery,
            ) -> Result<Vec<Self::Record>, $crate::errors::ServiceError> {
                use ::sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
                use ::models::$module::{Column, Entity};

                let mut select = Entity::find().order_by_asc(Column::CreatedAt).order_by_asc(Column::Id);
                if let Some(org) = query.organization_id {
                    select = select.filter(Column::OrganizationId.eq(org));
                }
                let rows = match query.pagination() {
                    Some(p) => {
                        let (page_idx, per_page) = p.normalize();
                        select.paginate(&self.db, per_page).fetch_page(page_idx).await?
                    }
                    None => select.all(&self.db).await?,
                };
                Ok(rows)
            }

            async fn find_by_id(&self, id: ::uuid::Uuid) -> Result<Self::Record, $crate::errors::ServiceError> {
                use ::sea_orm::EntityTrait;
                ::models::$module::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| $crate::errors::ServiceError::not_found($label))
            }

            async fn create(&self, input: Self::Create) -> Result<Self::Record, $crate::errors::ServiceError> {
                use ::sea_orm::ActiveModelTrait;
                let am = input.into_active(::uuid::Uuid::new_v4(), ::chrono::Utc::now().into())?;
                let created = am.insert(&self.db).await?;
                ::tracing::info!(event = "record_created", resource = $resource, id = %created.id);
                Ok(created)
            }

            async fn update(
                &self,
                id: ::uuid::Uuid,
                input: Self::Update,
            ) -> Result<Self::Record, $crate::errors::ServiceError> {
                use ::sea_orm::{ActiveModelTrait, Set};
                let mut am: ::models::$module::ActiveModel =
                    $crate::crud::CrudService::find_by_id(self, id).await?.into();
                input.apply(&mut am)?;
                am.updated_at = Set(::chrono::Utc::now().into());
                let updated = am.update(&self.db).await?;
                ::tracing::info!(event = "record_updated", resource = $resource, id = %id);
                Ok(updated)
            }

            async fn remove(&self, id: ::uuid::Uuid) -> Result<Self::Record, $crate::errors::ServiceError> {
                use ::sea_orm::EntityTrait;
                let existing = $crate::crud::CrudService::find_by_id(self, id).await?;
                ::models::$module::Entity::delete_by_id(id).exec(&self.db).await?;
                ::tracing::info!(event = "record_deleted", resource = $resource, id = %id);
                Ok(existing)
            }
        }
    };
}

pub(crate) use seaorm_crud_service;
