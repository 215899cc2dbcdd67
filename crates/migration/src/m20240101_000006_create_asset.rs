//! Create `asset` table.
//! Location and category links are optional and cleared when the target row goes away.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(uuid(Asset::Id).primary_key())
                    .col(uuid(Asset::OrganizationId).not_null())
                    .col(string_len(Asset::Name, 256).not_null())
                    .col(text_null(Asset::Description))
                    .col(string_len_null(Asset::SerialNumber, 128))
                    .col(uuid_null(Asset::LocationId))
                    .col(uuid_null(Asset::CategoryId))
                    .col(timestamp_with_time_zone(Asset::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Asset::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_organization")
                            .from(Asset::Table, Asset::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_location")
                            .from(Asset::Table, Asset::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_category")
                            .from(Asset::Table, Asset::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Asset::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Asset {
    Table,
    Id,
    OrganizationId,
    Name,
    Description,
    SerialNumber,
    LocationId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum Location { Table, Id }

#[derive(DeriveIden)]
enum Category { Table, Id }
