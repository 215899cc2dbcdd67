//! Create `purchase_order` table.
//! Shipping contact, cost breakdown and line items are stored as JSON documents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrder::Table)
                    .if_not_exists()
                    .col(uuid(PurchaseOrder::Id).primary_key())
                    .col(uuid(PurchaseOrder::OrganizationId).not_null())
                    .col(uuid(PurchaseOrder::VendorId).not_null())
                    .col(string_len(PurchaseOrder::Title, 256).not_null())
                    .col(string_len(PurchaseOrder::Status, 32).not_null())
                    .col(json(PurchaseOrder::LineItems).not_null())
                    .col(json_null(PurchaseOrder::Shipping))
                    .col(json_null(PurchaseOrder::CostBreakdown))
                    .col(timestamp_with_time_zone_null(PurchaseOrder::DueDate))
                    .col(text_null(PurchaseOrder::Notes))
                    .col(timestamp_with_time_zone(PurchaseOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PurchaseOrder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_order_organization")
                            .from(PurchaseOrder::Table, PurchaseOrder::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_order_vendor")
                            .from(PurchaseOrder::Table, PurchaseOrder::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PurchaseOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PurchaseOrder {
    Table,
    Id,
    OrganizationId,
    VendorId,
    Title,
    Status,
    LineItems,
    Shipping,
    CostBreakdown,
    DueDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum Vendor { Table, Id }
