//! SeaORM entities for every CMMS table, plus the create/update payloads
//! accepted for each resource and the mapping of those payloads onto
//! active models.

pub mod errors;
pub mod db;
pub mod dates;
pub mod organization;
pub mod user;
pub mod team;
pub mod location;
pub mod category;
pub mod asset;
pub mod meter;
pub mod vendor;
pub mod part;
pub mod procedure;
pub mod attachment;
pub mod purchase_order;
pub mod work_order;
pub mod work_order_comment;
pub mod work_order_assignee;
pub mod reminder;

#[cfg(test)]
mod tests;
