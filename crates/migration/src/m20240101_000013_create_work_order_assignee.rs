//! Create `work_order_assignee` join table (work order ↔ user).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkOrderAssignee::Table)
                    .if_not_exists()
                    .col(uuid(WorkOrderAssignee::WorkOrderId).not_null())
                    .col(uuid(WorkOrderAssignee::UserId).not_null())
                    .col(timestamp_with_time_zone(WorkOrderAssignee::AssignedAt).not_null())
                    .primary_key(
                        Index::create()
                            .col(WorkOrderAssignee::WorkOrderId)
                            .col(WorkOrderAssignee::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_assignee_work_order")
                            .from(WorkOrderAssignee::Table, WorkOrderAssignee::WorkOrderId)
                            .to(WorkOrder::Table, WorkOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_assignee_user")
                            .from(WorkOrderAssignee::Table, WorkOrderAssignee::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkOrderAssignee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkOrderAssignee { Table, WorkOrderId, UserId, AssignedAt }

#[derive(DeriveIden)]
enum WorkOrder { Table, Id }

#[derive(DeriveIden)]
enum AppUser { Table, Id }
