//! Create `work_order_comment` table. Comments go away with their work order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkOrderComment::Table)
                    .if_not_exists()
                    .col(uuid(WorkOrderComment::Id).primary_key())
                    .col(uuid(WorkOrderComment::WorkOrderId).not_null())
                    .col(uuid_null(WorkOrderComment::AuthorId))
                    .col(text(WorkOrderComment::Body).not_null())
                    .col(timestamp_with_time_zone(WorkOrderComment::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_comment_work_order")
                            .from(WorkOrderComment::Table, WorkOrderComment::WorkOrderId)
                            .to(WorkOrder::Table, WorkOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_comment_author")
                            .from(WorkOrderComment::Table, WorkOrderComment::AuthorId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkOrderComment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkOrderComment { Table, Id, WorkOrderId, AuthorId, Body, CreatedAt }

#[derive(DeriveIden)]
enum WorkOrder { Table, Id }

#[derive(DeriveIden)]
enum AppUser { Table, Id }
