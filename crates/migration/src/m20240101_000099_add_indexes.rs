use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TENANT_INDEXES: &[(&str, &str)] = &[
    ("idx_app_user_organization", "app_user"),
    ("idx_asset_organization", "asset"),
    ("idx_work_order_organization", "work_order"),
    ("idx_purchase_order_organization", "purchase_order"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // tenant-scoped listings filter on organization_id
        for (name, table) in TENANT_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new("organization_id"))
                        .to_owned(),
                )
                .await?;
        }

        // AppUser: one account per email within an organization
        manager
            .create_index(
                Index::create()
                    .name("uniq_app_user_organization_email")
                    .table(AppUser::Table)
                    .col(AppUser::OrganizationId)
                    .col(AppUser::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // WorkOrderComment: comments are always read per work order
        manager
            .create_index(
                Index::create()
                    .name("idx_work_order_comment_work_order")
                    .table(WorkOrderComment::Table)
                    .col(WorkOrderComment::WorkOrderId)
                    .to_owned(),
            )
            .await?;

        // Reminder: the sweep scans (status, fire_at)
        manager
            .create_index(
                Index::create()
                    .name("idx_reminder_status_fire_at")
                    .table(Reminder::Table)
                    .col(Reminder::Status)
                    .col(Reminder::FireAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in TENANT_INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        manager
            .drop_index(Index::drop().name("uniq_app_user_organization_email").table(AppUser::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_work_order_comment_work_order").table(WorkOrderComment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reminder_status_fire_at").table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AppUser { Table, OrganizationId, Email }

#[derive(DeriveIden)]
enum WorkOrderComment { Table, WorkOrderId }

#[derive(DeriveIden)]
enum Reminder { Table, Status, FireAt }
