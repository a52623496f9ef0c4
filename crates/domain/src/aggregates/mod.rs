//! Aggregates - consistency boundaries over entities

mod catalog;

pub use catalog::Catalog;
