//! MovieEntry entity - One published movie in the catalog
//!
//! The slug is both the display-route key and the dedup key. Entries are
//! never edited once added; they only enter and leave the catalog whole.

use serde::{Deserialize, Serialize};

/// A movie listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieEntry {
    /// Unique identifier, e.g. "stand-by-me-doraemon"
    pub slug: String,
    /// Display title
    pub title: String,
    /// URL or path of the poster artwork
    pub image: String,
    /// Short description shown under the title
    pub summary: String,
}

impl MovieEntry {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            image: image.into(),
            summary: summary.into(),
        }
    }

    /// Whether this entry is identified by `slug`
    pub fn has_slug(&self, slug: &str) -> bool {
        self.slug == slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_four_wire_keys() {
        let entry = MovieEntry::new("a", "A", "/images/a.jpg", "About A");
        let value = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(
            value,
            serde_json::json!({
                "slug": "a",
                "title": "A",
                "image": "/images/a.jpg",
                "summary": "About A"
            })
        );
    }

    #[test]
    fn deserializes_regardless_of_key_order() {
        let json = r#"{"title":"A","slug":"a","image":"/a.jpg","summary":"s"}"#;
        let entry: MovieEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry, MovieEntry::new("a", "A", "/a.jpg", "s"));
    }

    #[test]
    fn missing_key_is_rejected() {
        let json = r#"{"slug":"a","title":"A","image":"/a.jpg"}"#;
        assert!(serde_json::from_str::<MovieEntry>(json).is_err());
    }
}
