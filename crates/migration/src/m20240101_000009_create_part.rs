//! Create `part` table (inventory).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Part::Table)
                    .if_not_exists()
                    .col(uuid(Part::Id).primary_key())
                    .col(uuid(Part::OrganizationId).not_null())
                    .col(string_len(Part::Name, 256).not_null())
                    .col(string_len_null(Part::Sku, 64))
                    .col(integer(Part::Quantity).not_null())
                    .col(integer(Part::MinQuantity).not_null())
                    .col(double_null(Part::UnitCost))
                    .col(uuid_null(Part::LocationId))
                    .col(timestamp_with_time_zone(Part::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Part::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_organization")
                            .from(Part::Table, Part::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_location")
                            .from(Part::Table, Part::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Part::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Part {
    Table,
    Id,
    OrganizationId,
    Name,
    Sku,
    Quantity,
    MinQuantity,
    UnitCost,
    LocationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum Location { Table, Id }
