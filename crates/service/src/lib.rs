//! Service layer providing the CRUD contract for every CMMS resource.
//! - One service per resource, all behind the `CrudService` trait.
//! - Reuses validation and entity definitions in `models` crate.
//! - Hosts the reminder sweep and the in-memory notification store.

pub mod errors;
pub mod crud;
pub mod resources;
pub mod organization_service;
pub mod work_order_service;
pub mod storage;
pub mod notification;
pub mod reminder;
#[cfg(test)]
pub mod test_support;

pub use crud::CrudService;
pub use errors::ServiceError;
