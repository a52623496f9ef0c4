//! Unified error type for catalog operations
//!
//! Every catalog intent returns its failure as a `CatalogError` value so the
//! presenting layer can surface it inline. None of these are fatal.

use thiserror::Error;

use crate::value_objects::DraftField;

/// Unified error type for catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The persisted catalog snapshot could not be parsed
    #[error("Stored catalog is corrupt: {reason}")]
    CorruptState { reason: String },

    /// A required draft field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: DraftField },

    /// A movie with the same slug is already in the catalog
    #[error("A movie with slug '{slug}' already exists")]
    DuplicateSlug { slug: String },

    /// Delete was requested with nothing selected
    #[error("Select at least one movie to delete")]
    NoSelection,

    /// The catalog snapshot could not be encoded for storage
    #[error("Failed to serialize catalog: {reason}")]
    Serialization { reason: String },
}

impl CatalogError {
    /// Create a corrupt state error
    pub fn corrupt_state(reason: impl Into<String>) -> Self {
        Self::CorruptState {
            reason: reason.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: DraftField) -> Self {
        Self::MissingField { field }
    }

    /// Create a duplicate slug error
    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Self::DuplicateSlug { slug: slug.into() }
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }

    /// Whether the caller can simply re-prompt the user.
    ///
    /// Corrupt storage and encoding failures need a decision from the caller
    /// (for example falling back to the seed catalog); everything else is a
    /// user input problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::DuplicateSlug { .. } | Self::NoSelection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let err = CatalogError::missing_field(DraftField::Summary);
        assert!(matches!(err, CatalogError::MissingField { .. }));
        assert_eq!(err.to_string(), "Missing required field: summary");
    }

    #[test]
    fn test_duplicate_slug_error() {
        let err = CatalogError::duplicate_slug("birth-of-japan");
        assert_eq!(
            err.to_string(),
            "A movie with slug 'birth-of-japan' already exists"
        );
    }

    #[test]
    fn test_corrupt_state_error() {
        let err = CatalogError::corrupt_state("expected value at line 1 column 1");
        assert!(err.to_string().starts_with("Stored catalog is corrupt"));
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(CatalogError::NoSelection.is_recoverable());
        assert!(CatalogError::duplicate_slug("a").is_recoverable());
        assert!(CatalogError::missing_field(DraftField::Title).is_recoverable());
        assert!(!CatalogError::corrupt_state("bad").is_recoverable());
        assert!(!CatalogError::serialization("bad").is_recoverable());
    }
}
