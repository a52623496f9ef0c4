//! Slugs marked for batch deletion
//!
//! Membership is not checked against the catalog. A slug that no longer
//! names an entry simply matches nothing when the selection is acted upon.

use serde::{Deserialize, Serialize};

/// Set of selected slugs, kept in the order they were first selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `slug` if unselected, otherwise unselect it.
    ///
    /// Returns whether the slug is selected afterwards.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|s| s == slug) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(slug.to_string());
            true
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.iter().any(|s| s == slug)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for slug in iter {
            let slug = slug.into();
            if !set.contains(&slug) {
                set.0.push(slug);
            }
        }
        set
    }
}
