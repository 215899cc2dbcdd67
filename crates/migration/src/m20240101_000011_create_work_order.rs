//! Create `work_order` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkOrder::Table)
                    .if_not_exists()
                    .col(uuid(WorkOrder::Id).primary_key())
                    .col(uuid(WorkOrder::OrganizationId).not_null())
                    .col(string_len(WorkOrder::Title, 256).not_null())
                    .col(text_null(WorkOrder::Description))
                    .col(string_len(WorkOrder::Status, 32).not_null())
                    .col(string_len(WorkOrder::Priority, 32).not_null())
                    .col(uuid_null(WorkOrder::AssetId))
                    .col(uuid_null(WorkOrder::LocationId))
                    .col(timestamp_with_time_zone_null(WorkOrder::DueDate))
                    .col(timestamp_with_time_zone(WorkOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(WorkOrder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_organization")
                            .from(WorkOrder::Table, WorkOrder::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_asset")
                            .from(WorkOrder::Table, WorkOrder::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_order_location")
                            .from(WorkOrder::Table, WorkOrder::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkOrder {
    Table,
    Id,
    OrganizationId,
    Title,
    Description,
    Status,
    Priority,
    AssetId,
    LocationId,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum Asset { Table, Id }

#[derive(DeriveIden)]
enum Location { Table, Id }
