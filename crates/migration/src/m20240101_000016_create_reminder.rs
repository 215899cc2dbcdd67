//! Create `reminder` table, polled by the reminder sweep.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(uuid(Reminder::Id).primary_key())
                    .col(uuid(Reminder::OrganizationId).not_null())
                    .col(uuid_null(Reminder::WorkOrderId))
                    .col(uuid_null(Reminder::UserId))
                    .col(text(Reminder::Message).not_null())
                    .col(timestamp_with_time_zone(Reminder::FireAt).not_null())
                    .col(string_len(Reminder::Status, 16).not_null())
                    .col(integer(Reminder::Attempts).not_null().default(0))
                    .col(text_null(Reminder::LastError))
                    .col(timestamp_with_time_zone(Reminder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Reminder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_organization")
                            .from(Reminder::Table, Reminder::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_work_order")
                            .from(Reminder::Table, Reminder::WorkOrderId)
                            .to(WorkOrder::Table, WorkOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_user")
                            .from(Reminder::Table, Reminder::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reminder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reminder {
    Table,
    Id,
    OrganizationId,
    WorkOrderId,
    UserId,
    Message,
    FireAt,
    Status,
    Attempts,
    LastError,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum WorkOrder { Table, Id }

#[derive(DeriveIden)]
enum AppUser { Table, Id }
