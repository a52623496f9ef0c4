pub mod aggregates;
pub mod entities;
pub mod error;
pub mod seed;
pub mod value_objects;

pub use aggregates::Catalog;
pub use entities::MovieEntry;
pub use error::CatalogError;
pub use seed::{seed_catalog, SeedEntryDef, SEED_ENTRIES};
pub use value_objects::{DraftEntry, DraftField, SelectionSet, Session, UserRole};
