//! Create `attachment` table. `files` is a JSON list of stored file references.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(uuid(Attachment::Id).primary_key())
                    .col(uuid(Attachment::OrganizationId).not_null())
                    .col(string_len(Attachment::Name, 256).not_null())
                    .col(json(Attachment::Files).not_null())
                    .col(uuid_null(Attachment::WorkOrderId))
                    .col(timestamp_with_time_zone(Attachment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Attachment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attachment_organization")
                            .from(Attachment::Table, Attachment::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attachment_work_order")
                            .from(Attachment::Table, Attachment::WorkOrderId)
                            .to(WorkOrder::Table, WorkOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attachment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attachment { Table, Id, OrganizationId, Name, Files, WorkOrderId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum WorkOrder { Table, Id }
