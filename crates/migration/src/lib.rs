//! Migrator registering table migrations in foreign-key dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_organization;
mod m20240101_000002_create_app_user;
mod m20240101_000003_create_team;
mod m20240101_000004_create_location;
mod m20240101_000005_create_category;
mod m20240101_000006_create_asset;
mod m20240101_000007_create_meter;
mod m20240101_000008_create_vendor;
mod m20240101_000009_create_part;
mod m20240101_000010_create_procedure;
mod m20240101_000011_create_work_order;
mod m20240101_000012_create_work_order_comment;
mod m20240101_000013_create_work_order_assignee;
mod m20240101_000014_create_attachment;
mod m20240101_000015_create_purchase_order;
mod m20240101_000016_create_reminder;
mod m20240101_000099_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_organization::Migration),
            Box::new(m20240101_000002_create_app_user::Migration),
            Box::new(m20240101_000003_create_team::Migration),
            Box::new(m20240101_000004_create_location::Migration),
            Box::new(m20240101_000005_create_category::Migration),
            Box::new(m20240101_000006_create_asset::Migration),
            Box::new(m20240101_000007_create_meter::Migration),
            Box::new(m20240101_000008_create_vendor::Migration),
            Box::new(m20240101_000009_create_part::Migration),
            Box::new(m20240101_000010_create_procedure::Migration),
            Box::new(m20240101_000011_create_work_order::Migration),
            Box::new(m20240101_000012_create_work_order_comment::Migration),
            Box::new(m20240101_000013_create_work_order_assignee::Migration),
            Box::new(m20240101_000014_create_attachment::Migration),
            Box::new(m20240101_000015_create_purchase_order::Migration),
            Box::new(m20240101_000016_create_reminder::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000099_add_indexes::Migration),
        ]
    }
}
