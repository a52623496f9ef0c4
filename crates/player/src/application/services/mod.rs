//! Application services used by the presenting layer

mod catalog_store;
mod session_service;

pub use catalog_store::CatalogStore;
pub use session_service::SessionService;
