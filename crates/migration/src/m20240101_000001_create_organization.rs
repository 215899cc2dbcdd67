//! Create `organization` table.
//!
//! Tenant root; every other table references it through `organization_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(uuid(Organization::Id).primary_key())
                    .col(string_len(Organization::Name, 128).unique_key().not_null())
                    .col(json_null(Organization::Contact))
                    .col(string_len_null(Organization::Address, 512))
                    .col(timestamp_with_time_zone(Organization::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Organization::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Organization::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Organization { Table, Id, Name, Contact, Address, CreatedAt, UpdatedAt }
