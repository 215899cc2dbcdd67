use async_trait::async_trait;
use chrono::Utc;
use common::pagination::ListQuery;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use models::organization;
use crate::{crud::CrudService, errors::ServiceError};

/// Organizations are the tenant root: every other row hangs off one and is
/// removed with it.
#[derive(Clone)]
pub struct OrganizationService {
    db: DatabaseConnection,
}

impl OrganizationService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Look an organization up by its unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<organization::Model>, ServiceError> {
        let found = organization::Entity::find()
            .filter(organization::Column::Name.eq(name.trim()))
            .one(&self.db)
            .await?;
        Ok(found)
    }
}

#[async_trait]
impl CrudService for OrganizationService {
    type Record = organization::Model;
    type Create = organization::CreateOrganization;
    type Update = organization::UpdateOrganization;

    fn resource(&self) -> &'static str { "organizations" }

    /// `organization_id` narrows the list to that single organization.
    async fn find_all(&self, query: ListQuery) -> Result<Vec<organization::Model>, ServiceError> {
        let mut select = organization::Entity::find()
            .order_by_asc(organization::Column::CreatedAt)
            .order_by_asc(organization::Column::Id);
        if let Some(id) = query.organization_id {
            select = select.filter(organization::Column::Id.eq(id));
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

    async fn find_by_id(&self, id: Uuid) -> Result<organization::Model, ServiceError> {
        organization::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("organization"))
    }

    async fn create(&self, input: organization::CreateOrganization) -> Result<organization::Model, ServiceError> {
        if self.find_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::Validation(format!("organization '{}' already exists", input.name.trim())));
        }
        let am = input.into_active(Uuid::new_v4(), Utc::now().into())?;
        let created = am.insert(&self.db).await?;
        info!(event = "organization_created", id = %created.id, name = %created.name);
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: organization::UpdateOrganization) -> Result<organization::Model, ServiceError> {
        let existing = self.find_by_id(id).await?;
        if let Some(name) = input.name.as_deref() {
            if let Some(other) = self.find_by_name(name).await? {
                if other.id != id {
                    return Err(ServiceError::Validation(format!("organization '{}' already exists", name.trim())));
                }
            }
        }
        let mut am: organization::ActiveModel = existing.into();
        input.apply(&mut am)?;
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await?;
        info!(event = "organization_updated", id = %id);
        Ok(updated)
    }

    /// Cascades to every row owned by the organization.
    async fn remove(&self, id: Uuid) -> Result<organization::Model, ServiceError> {
        let existing = self.find_by_id(id).await?;
        organization::Entity::delete_by_id(id).exec(&self.db).await?;
        info!(event = "organization_deleted", id = %id);
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn named(name: &str) -> organization::CreateOrganization {
        organization::CreateOrganization { name: name.into(), contact: None, address: Some("1 Plant Rd".into()) }
    }

    #[tokio::test]
    async fn organization_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = OrganizationService::new(db);

        let name = format!("svc_org_{}", Uuid::new_v4());
        let o = svc.create(named(&name)).await?;
        assert_eq!(o.name, name);

        let found = svc.find_by_id(o.id).await?;
        assert_eq!(found.id, o.id);
        assert_eq!(svc.find_by_name(&name).await?.map(|m| m.id), Some(o.id));

        let updated = svc
            .update(o.id, organization::UpdateOrganization { name: Some("new_name".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.name, "new_name");
        assert_eq!(updated.address.as_deref(), Some("1 Plant Rd"));

        let listed = svc.find_all(ListQuery::for_organization(o.id)).await?;
        assert_eq!(listed.len(), 1);

        svc.remove(o.id).await?;
        assert!(matches!(svc.find_by_id(o.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = OrganizationService::new(db);
        svc.create(named("Acme")).await?;
        assert!(matches!(svc.create(named("Acme")).await, Err(ServiceError::Validation(_))));

        let other = svc.create(named("Globex")).await?;
        let res = svc
            .update(other.id, organization::UpdateOrganization { name: Some("Acme".into()), ..Default::default() })
            .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
