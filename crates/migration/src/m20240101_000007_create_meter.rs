//! Create `meter` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meter::Table)
                    .if_not_exists()
                    .col(uuid(Meter::Id).primary_key())
                    .col(uuid(Meter::OrganizationId).not_null())
                    .col(uuid_null(Meter::AssetId))
                    .col(string_len(Meter::Name, 128).not_null())
                    .col(string_len(Meter::Unit, 32).not_null())
                    .col(double_null(Meter::LastReading))
                    .col(timestamp_with_time_zone(Meter::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Meter::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meter_organization")
                            .from(Meter::Table, Meter::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meter_asset")
                            .from(Meter::Table, Meter::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Meter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Meter { Table, Id, OrganizationId, AssetId, Name, Unit, LastReading, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum Asset { Table, Id }
