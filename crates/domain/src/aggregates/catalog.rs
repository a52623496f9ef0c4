//! Catalog aggregate - the ordered list of published movies
//!
//! # Invariants
//!
//! - Insertion order is display order.
//! - No two entries share a slug.
//!
//! Mutations are expressed as "produce the next snapshot" so callers can
//! persist the candidate before swapping it in. A rejected change never
//! leaves a half-applied catalog behind.

use serde::{Deserialize, Serialize};

use crate::entities::MovieEntry;
use crate::error::CatalogError;
use crate::value_objects::{DraftEntry, SelectionSet};

/// Ordered, slug-unique list of movie entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MovieEntry>", into = "Vec<MovieEntry>")]
pub struct Catalog {
    entries: Vec<MovieEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate slugs
    pub fn from_entries(entries: Vec<MovieEntry>) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.slug == entry.slug) {
                return Err(CatalogError::duplicate_slug(entry.slug.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a stored snapshot (a JSON array of entries).
    ///
    /// Anything that is not a well-formed, slug-unique array is reported as
    /// `CatalogError::CorruptState`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<MovieEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::corrupt_state(e.to_string()))?;
        Self::from_entries(entries).map_err(|e| CatalogError::corrupt_state(e.to_string()))
    }

    /// Encode as the stored snapshot format
    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string(&self.entries).map_err(|e| CatalogError::serialization(e.to_string()))
    }

    pub fn entries(&self) -> &[MovieEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&MovieEntry> {
        self.entries.iter().find(|e| e.has_slug(slug))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Check a draft against the add rules and return the entry it would
    /// become.
    ///
    /// # Errors
    ///
    /// - `MissingField` for the first empty field (title, slug, image, summary)
    /// - `DuplicateSlug` if the slug is already taken
    pub fn validate_draft(&self, draft: &DraftEntry) -> Result<MovieEntry, CatalogError> {
        if let Some(field) = draft.first_missing_field() {
            return Err(CatalogError::missing_field(field));
        }
        if self.contains(&draft.slug) {
            return Err(CatalogError::duplicate_slug(draft.slug.clone()));
        }
        Ok(draft.clone().into_entry())
    }

    /// The catalog with `draft` appended at the end.
    pub fn with_entry(&self, draft: &DraftEntry) -> Result<Self, CatalogError> {
        let entry = self.validate_draft(draft)?;
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }

    /// The catalog without any entry whose slug is selected, plus how many
    /// entries were dropped. Survivors keep their relative order.
    pub fn without_selected(&self, selection: &SelectionSet) -> (Self, usize) {
        let entries: Vec<MovieEntry> = self
            .entries
            .iter()
            .filter(|e| !selection.contains(&e.slug))
            .cloned()
            .collect();
        let removed = self.entries.len() - entries.len();
        (Self { entries }, removed)
    }
}

impl TryFrom<Vec<MovieEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<MovieEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Catalog> for Vec<MovieEntry> {
    fn from(catalog: Catalog) -> Vec<MovieEntry> {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieEntry;
    type IntoIter = std::slice::Iter<'a, MovieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DraftField;

    fn entry(slug: &str) -> MovieEntry {
        MovieEntry::new(slug, slug.to_uppercase(), format!("/images/{slug}.jpg"), "summary")
    }

    fn catalog(slugs: &[&str]) -> Catalog {
        Catalog::from_entries(slugs.iter().map(|s| entry(s)).collect()).expect("unique slugs")
    }

    fn slugs(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(|e| e.slug.as_str()).collect()
    }

    fn draft(slug: &str) -> DraftEntry {
        DraftEntry::from(entry(slug))
    }

    #[test]
    fn duplicate_slugs_are_rejected_on_construction() {
        let err = Catalog::from_entries(vec![entry("a"), entry("b"), entry("a")])
            .expect_err("should be rejected");
        assert_eq!(err, CatalogError::duplicate_slug("a"));
    }

    #[test]
    fn with_entry_appends_at_the_end() {
        let before = catalog(&["a", "b"]);
        let after = before.with_entry(&draft("c")).expect("valid draft");

        assert_eq!(slugs(&after), vec!["a", "b", "c"]);
        assert_eq!(&after.entries()[..2], before.entries());
    }

    #[test]
    fn with_entry_rejects_duplicate_slug() {
        let before = catalog(&["a"]);
        let err = before.with_entry(&draft("a")).expect_err("should be rejected");

        assert_eq!(err, CatalogError::duplicate_slug("a"));
        assert_eq!(slugs(&before), vec!["a"]);
    }

    #[test]
    fn missing_field_is_reported_before_duplicate_slug() {
        let before = catalog(&["a"]);
        let incomplete = draft("a").with(DraftField::Image, "");

        let err = before.with_entry(&incomplete).expect_err("should be rejected");
        assert_eq!(err, CatalogError::missing_field(DraftField::Image));
    }

    #[test]
    fn without_selected_keeps_survivor_order() {
        let before = catalog(&["a", "b", "c", "d", "e"]);
        let selection: SelectionSet = ["d", "b"].into_iter().collect();

        let (after, removed) = before.without_selected(&selection);

        assert_eq!(removed, 2);
        assert_eq!(slugs(&after), vec!["a", "c", "e"]);
    }

    #[test]
    fn stale_selection_removes_nothing() {
        let before = catalog(&["a", "b"]);
        let selection: SelectionSet = ["gone"].into_iter().collect();

        let (after, removed) = before.without_selected(&selection);

        assert_eq!(removed, 0);
        assert_eq!(after, before);
    }

    #[test]
    fn json_round_trip_preserves_entries_and_order() {
        let original = catalog(&["c", "a", "b"]);
        let json = original.to_json().expect("serialize");

        assert_eq!(Catalog::from_json(&json), Ok(original));
    }

    #[test]
    fn snapshot_is_a_plain_json_array() {
        let json = catalog(&["a"]).to_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.is_array());
    }

    #[test]
    fn malformed_json_is_corrupt_state() {
        let err = Catalog::from_json("{not json").expect_err("should be rejected");
        assert!(matches!(err, CatalogError::CorruptState { .. }));
    }

    #[test]
    fn wrong_shape_is_corrupt_state() {
        let err = Catalog::from_json(r#"{"slug":"a"}"#).expect_err("should be rejected");
        assert!(matches!(err, CatalogError::CorruptState { .. }));
    }

    #[test]
    fn duplicate_slugs_in_snapshot_are_corrupt_state() {
        let json = serde_json::to_string(&vec![entry("a"), entry("a")]).expect("serialize");
        let err = Catalog::from_json(&json).expect_err("should be rejected");

        assert!(matches!(err, CatalogError::CorruptState { .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn serde_deserialize_enforces_unique_slugs() {
        let json = serde_json::to_string(&vec![entry("a"), entry("b"), entry("a")])
            .expect("serialize");
        assert!(serde_json::from_str::<Catalog>(&json).is_err());
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let parsed = Catalog::from_json("[]").expect("valid snapshot");
        assert!(parsed.is_empty());
    }
}
