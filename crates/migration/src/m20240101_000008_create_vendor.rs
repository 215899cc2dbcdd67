//! Create `vendor` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(uuid(Vendor::Id).primary_key())
                    .col(uuid(Vendor::OrganizationId).not_null())
                    .col(string_len(Vendor::Name, 256).not_null())
                    .col(json_null(Vendor::Contact))
                    .col(string_len_null(Vendor::Address, 512))
                    .col(string_len_null(Vendor::Website, 512))
                    .col(timestamp_with_time_zone(Vendor::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Vendor::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_organization")
                            .from(Vendor::Table, Vendor::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vendor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vendor { Table, Id, OrganizationId, Name, Contact, Address, Website, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Organization { Table, Id }
