//! Movieblog player crate.
//!
//! This crate contains the catalog store, session handling and the storage
//! adapters. Multi-platform support is provided via compile-time `cfg`
//! selection.

pub mod application;
pub mod infrastructure;
pub mod ports;

// Re-export commonly used entrypoints
pub use application::services::{CatalogStore, SessionService};
pub use infrastructure::platform::{create_storage, MemoryStorageProvider};
pub use ports::outbound::{storage_keys, StorageProvider};
