//! Storage abstractions for service layer
//!
//! Contains the in-memory record store used for resources without a table.

pub mod memory_store;

pub use memory_store::{MemoryRecord, MemoryStore};
