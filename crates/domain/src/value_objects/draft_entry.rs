//! Draft entries for the "add movie" form
//!
//! A `DraftEntry` holds whatever the user has typed so far. It is only
//! checked when submitted; see `Catalog::with_entry`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::MovieEntry;

/// One input of the add-movie form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Slug,
    Image,
    Summary,
}

impl DraftField {
    /// All fields, in the order they are validated and shown
    pub const ALL: [DraftField; 4] = [Self::Title, Self::Slug, Self::Image, Self::Summary];

    /// The form input name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Slug => "slug",
            Self::Image => "image",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown form input name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown draft field: {0}")]
pub struct ParseDraftFieldError(pub String);

impl FromStr for DraftField {
    type Err = ParseDraftFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "slug" => Ok(Self::Slug),
            "image" => Ok(Self::Image),
            "summary" => Ok(Self::Summary),
            _ => Err(ParseDraftFieldError(s.to_string())),
        }
    }
}

/// A movie entry under composition, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub title: String,
    pub slug: String,
    pub image: String,
    pub summary: String,
}

impl DraftEntry {
    /// An empty draft, as shown when the form first opens
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replace the value of one field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Slug => self.slug = value,
            DraftField::Image => self.image = value,
            DraftField::Summary => self.summary = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Slug => &self.slug,
            DraftField::Image => &self.image,
            DraftField::Summary => &self.summary,
        }
    }

    /// First empty field in validation order, if any
    pub fn first_missing_field(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// True when nothing has been typed yet
    pub fn is_empty(&self) -> bool {
        DraftField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Convert into an entry without checking anything.
    pub(crate) fn into_entry(self) -> MovieEntry {
        MovieEntry {
            slug: self.slug,
            title: self.title,
            image: self.image,
            summary: self.summary,
        }
    }
}

impl From<MovieEntry> for DraftEntry {
    fn from(entry: MovieEntry) -> Self {
        Self {
            title: entry.title,
            slug: entry.slug,
            image: entry.image,
            summary: entry.summary,
        }
    }
}
