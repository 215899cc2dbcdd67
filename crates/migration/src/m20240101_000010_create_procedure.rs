//! Create `procedure` table. `steps` holds the ordered checklist as JSON.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Procedure::Table)
                    .if_not_exists()
                    .col(uuid(Procedure::Id).primary_key())
                    .col(uuid(Procedure::OrganizationId).not_null())
                    .col(string_len(Procedure::Name, 256).not_null())
                    .col(text_null(Procedure::Description))
                    .col(json(Procedure::Steps).not_null())
                    .col(timestamp_with_time_zone(Procedure::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Procedure::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procedure_organization")
                            .from(Procedure::Table, Procedure::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Procedure::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Procedure { Table, Id, OrganizationId, Name, Description, Steps, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Organization { Table, Id }
