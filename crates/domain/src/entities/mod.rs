//! Domain entities - Core business objects with identity

mod movie_entry;

pub use movie_entry::MovieEntry;
