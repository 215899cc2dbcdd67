use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use common::pagination::ListQuery;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{work_order, work_order_assignee, work_order_comment};
use crate::{crud::CrudService, errors::ServiceError};

/// A work order with its comments (oldest first) and assignee ids.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkOrderRecord {
    #[serde(flatten)]
    pub work_order: work_order::Model,
    pub comments: Vec<work_order_comment::Model>,
    pub assignee_ids: Vec<Uuid>,
}

impl WorkOrderRecord {
    fn assemble(
        work_order: work_order::Model,
        mut comments: Vec<work_order_comment::Model>,
        assignees: Vec<work_order_assignee::Model>,
    ) -> Self {
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let mut assignee_ids: Vec<Uuid> = assignees.into_iter().map(|a| a.user_id).collect();
        assignee_ids.sort();
        Self { work_order, comments, assignee_ids }
    }
}

/// Work orders always travel with their comments and assignees, so every
/// read and write here returns a `WorkOrderRecord`.
#[derive(Clone)]
pub struct WorkOrderService {
    db: DatabaseConnection,
}

impl WorkOrderService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn load(&self, model: work_order::Model) -> Result<WorkOrderRecord, ServiceError> {
        let comments = model
            .find_related(work_order_comment::Entity)
            .order_by_asc(work_order_comment::Column::CreatedAt)
            .all(&self.db)
            .await?;
        let assignees = model.find_related(work_order_assignee::Entity).all(&self.db).await?;
        Ok(WorkOrderRecord::assemble(model, comments, assignees))
    }

    async fn find_model(&self, id: Uuid) -> Result<work_order::Model, ServiceError> {
        work_order::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work order"))
    }

    /// Replace the assignee set in one transaction.
    #[instrument(skip(self, user_ids), fields(work_order_id = %id, count = user_ids.len()))]
    pub async fn assign(&self, id: Uuid, user_ids: Vec<Uuid>) -> Result<WorkOrderRecord, ServiceError> {
        let existing = self.find_model(id).await?;
        let unique: BTreeSet<Uuid> = user_ids.into_iter().collect();
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        let txn = self.db.begin().await?;
        work_order_assignee::Entity::delete_many()
            .filter(work_order_assignee::Column::WorkOrderId.eq(id))
            .exec(&txn)
            .await?;
        if !unique.is_empty() {
            let rows = unique.iter().map(|user_id| work_order_assignee::ActiveModel {
                work_order_id: Set(id),
                user_id: Set(*user_id),
                assigned_at: Set(now),
            });
            work_order_assignee::Entity::insert_many(rows).exec_without_returning(&txn).await?;
        }
        let mut am: work_order::ActiveModel = existing.into();
        am.updated_at = Set(now);
        let updated = am.update(&txn).await?;
        txn.commit().await?;

        info!(event = "work_order_assigned", work_order_id = %id, assignees = unique.len());
        self.load(updated).await
    }

    /// Append a comment and return the refreshed work order.
    pub async fn add_comment(
        &self,
        id: Uuid,
        input: work_order_comment::CreateComment,
    ) -> Result<WorkOrderRecord, ServiceError> {
        let existing = self.find_model(id).await?;
        let am = input.into_active(Uuid::new_v4(), id, Utc::now().into())?;
        let comment = am.insert(&self.db).await?;
        info!(event = "work_order_commented", work_order_id = %id, comment_id = %comment.id);
        self.load(existing).await
    }
}

#[async_trait]
impl CrudService for WorkOrderService {
    type Record = WorkOrderRecord;
    type Create = work_order::CreateWorkOrder;
    type Update = work_order::UpdateWorkOrder;

    fn resource(&self) -> &'static str { "work-orders" }

    async fn find_all(&self, query: ListQuery) -> Result<Vec<WorkOrderRecord>, ServiceError> {
        let mut select = work_order::Entity::find()
            .order_by_asc(work_order::Column::CreatedAt)
            .order_by_asc(work_order::Column::Id);
        if let Some(org) = query.organization_id {
            select = select.filter(work_order::Column::OrganizationId.eq(org));
        }
        let orders = match query.pagination() {
            Some(p) => {
                let (page_idx, per_page) = p.normalize();
                select.paginate(&self.db, per_page).fetch_page(page_idx).await?
            }
            None => select.all(&self.db).await?,
        };

        let comments = orders.load_many(work_order_comment::Entity, &self.db).await?;
        let assignees = orders.load_many(work_order_assignee::Entity, &self.db).await?;
        Ok(orders
            .into_iter()
            .zip(comments)
            .zip(assignees)
            .map(|((wo, c), a)| WorkOrderRecord::assemble(wo, c, a))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<WorkOrderRecord, ServiceError> {
        let model = self.find_model(id).await?;
        self.load(model).await
    }

    async fn create(&self, input: work_order::CreateWorkOrder) -> Result<WorkOrderRecord, ServiceError> {
        let am = input.into_active(Uuid::new_v4(), Utc::now().into())?;
        let created = am.insert(&self.db).await?;
        info!(event = "record_created", resource = "work-orders", id = %created.id);
        Ok(WorkOrderRecord::assemble(created, Vec::new(), Vec::new()))
    }

    async fn update(&self, id: Uuid, input: work_order::UpdateWorkOrder) -> Result<WorkOrderRecord, ServiceError> {
        let mut am: work_order::ActiveModel = self.find_model(id).await?.into();
        input.apply(&mut am)?;
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await?;
        info!(event = "record_updated", resource = "work-orders", id = %id);
        self.load(updated).await
    }

    /// Comments and assignee links go with the work order.
    async fn remove(&self, id: Uuid) -> Result<WorkOrderRecord, ServiceError> {
        let existing = self.find_by_id(id).await?;
        work_order::Entity::delete_by_id(id).exec(&self.db).await?;
        info!(event = "record_deleted", resource = "work-orders", id = %id);
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::resources::UserService;
    use crate::test_support::{get_db, seed_organization};
    use models::user;

    fn order(org: Uuid, title: &str) -> work_order::CreateWorkOrder {
        work_order::CreateWorkOrder {
            organization_id: org,
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            asset_id: None,
            location_id: None,
            due_date: None,
        }
    }

    async fn seed_user(db: &DatabaseConnection, org: Uuid, name: &str) -> Result<Uuid, anyhow::Error> {
        let u = UserService::new(db.clone())
            .create(user::CreateUser {
                organization_id: org,
                email: format!("{name}@example.com"),
                name: name.into(),
                role: Some("technician".into()),
            })
            .await?;
        Ok(u.id)
    }

    #[tokio::test]
    async fn every_read_carries_comments_oldest_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organization(&db).await?;
        let author = seed_user(&db, org, "tech").await?;
        let svc = WorkOrderService::new(db);

        let wo = svc.create(order(org, "Replace belt")).await?;
        assert_eq!(wo.work_order.status, "open");
        assert_eq!(wo.work_order.priority, "none");
        assert!(wo.comments.is_empty());

        svc.add_comment(wo.work_order.id, work_order_comment::CreateComment { author_id: Some(author), body: "first".into() })
            .await?;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let refreshed = svc
            .add_comment(wo.work_order.id, work_order_comment::CreateComment { author_id: None, body: "second".into() })
            .await?;
        let bodies: Vec<_> = refreshed.comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second"]);

        let updated = svc
            .update(wo.work_order.id, work_order::UpdateWorkOrder { status: Some("in_progress".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.work_order.status, "in_progress");
        assert_eq!(updated.comments.len(), 2);

        let listed = svc.find_all(ListQuery::for_organization(org)).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].comments.len(), 2);
        assert_eq!(listed[0].comments[0].body, "first");

        let removed = svc.remove(wo.work_order.id).await?;
        assert_eq!(removed.comments.len(), 2);
        assert!(matches!(svc.find_by_id(wo.work_order.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn assign_replaces_previous_assignees() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organization(&db).await?;
        let a = seed_user(&db, org, "alice").await?;
        let b = seed_user(&db, org, "bob").await?;
        let svc = WorkOrderService::new(db);
        let wo = svc.create(order(org, "Inspect boiler")).await?;

        let first = svc.assign(wo.work_order.id, vec![a, b, a]).await?;
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(first.assignee_ids, expected);

        let second = svc.assign(wo.work_order.id, vec![b]).await?;
        assert_eq!(second.assignee_ids, vec![b]);

        let cleared = svc.assign(wo.work_order.id, vec![]).await?;
        assert!(cleared.assignee_ids.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_status_and_missing_order_are_errors() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organization(&db).await?;
        let svc = WorkOrderService::new(db);

        let bad = work_order::CreateWorkOrder { status: Some("finished".into()), ..order(org, "x") };
        assert!(matches!(svc.create(bad).await, Err(ServiceError::Model(_))));

        let missing = svc
            .add_comment(Uuid::new_v4(), work_order_comment::CreateComment { author_id: None, body: "hi".into() })
            .await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.assign(Uuid::new_v4(), vec![]).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
