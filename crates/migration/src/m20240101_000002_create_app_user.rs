//! Create `app_user` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(uuid(AppUser::Id).primary_key())
                    .col(uuid(AppUser::OrganizationId).not_null())
                    .col(string_len(AppUser::Email, 256).not_null())
                    .col(string_len(AppUser::Name, 128).not_null())
                    .col(string_len(AppUser::Role, 32).not_null())
                    .col(timestamp_with_time_zone(AppUser::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AppUser::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_user_organization")
                            .from(AppUser::Table, AppUser::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppUser { Table, Id, OrganizationId, Email, Name, Role, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Organization { Table, Id }
