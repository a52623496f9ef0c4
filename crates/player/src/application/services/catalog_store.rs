//! Catalog store
//!
//! Owns the in-memory catalog, the current selection and the open add-form
//! draft, and keeps the `blogs` storage key in step with the catalog. Every
//! successful mutation writes the full snapshot back before it becomes
//! visible; a rejected mutation changes nothing.

use movieblog_domain::{
    seed_catalog, Catalog, CatalogError, DraftEntry, DraftField, MovieEntry, SelectionSet,
};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Catalog state bound to persistent storage
pub struct CatalogStore<S: StorageProvider> {
    storage: S,
    catalog: Catalog,
    selection: SelectionSet,
    draft: Option<DraftEntry>,
}

impl<S: StorageProvider> CatalogStore<S> {
    /// Load the catalog from storage, seeding it on first run.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CorruptState` if a stored snapshot exists but
    /// cannot be parsed. Nothing is written in that case; falling back to
    /// the seed list is the caller's decision.
    pub fn initialize(storage: S) -> Result<Self, CatalogError> {
        let catalog = match storage.load(storage_keys::BLOGS) {
            Some(json) => {
                let catalog = Catalog::from_json(&json).inspect_err(|e| {
                    tracing::warn!(error = %e, "Stored catalog could not be loaded");
                })?;
                tracing::debug!(entries = catalog.len(), "Loaded catalog from storage");
                catalog
            }
            None => {
                let catalog = seed_catalog();
                storage.save(storage_keys::BLOGS, &catalog.to_json()?);
                tracing::debug!(entries = catalog.len(), "Seeded catalog into storage");
                catalog
            }
        };

        Ok(Self {
            storage,
            catalog,
            selection: SelectionSet::new(),
            draft: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Entries in display order
    pub fn entries(&self) -> &[MovieEntry] {
        self.catalog.entries()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selection.contains(slug)
    }

    /// The draft being composed, if the add form is open
    pub fn draft(&self) -> Option<&DraftEntry> {
        self.draft.as_ref()
    }

    pub fn is_adding(&self) -> bool {
        self.draft.is_some()
    }

    /// Validate `draft` and append it to the catalog.
    ///
    /// On success the snapshot is persisted and the open draft (if any) is
    /// discarded.
    ///
    /// # Errors
    ///
    /// - `MissingField` if any field is empty
    /// - `DuplicateSlug` if the slug is already in the catalog
    pub fn add_entry(&mut self, draft: &DraftEntry) -> Result<(), CatalogError> {
        let next = self.catalog.with_entry(draft).inspect_err(|e| {
            tracing::warn!(error = %e, slug = %draft.slug, "Rejected new movie");
        })?;
        self.commit(next)?;
        self.draft = None;
        tracing::info!(slug = %draft.slug, "Added movie");
        Ok(())
    }

    /// Select `slug` if unselected, unselect it otherwise.
    ///
    /// The slug does not have to be in the catalog. Returns whether it is
    /// selected afterwards.
    pub fn toggle_selection(&mut self, slug: &str) -> bool {
        self.selection.toggle(slug)
    }

    /// Remove every selected entry and clear the selection.
    ///
    /// Returns how many entries were removed; selected slugs that are no
    /// longer in the catalog count for nothing.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoSelection` if nothing is selected.
    pub fn delete_selected(&mut self) -> Result<usize, CatalogError> {
        if self.selection.is_empty() {
            tracing::warn!("Delete requested with no movies selected");
            return Err(CatalogError::NoSelection);
        }

        let (next, removed) = self.catalog.without_selected(&self.selection);
        self.commit(next)?;
        self.selection.clear();
        tracing::info!(removed, remaining = self.catalog.len(), "Deleted selected movies");
        Ok(removed)
    }

    /// Drop the selection and any open draft. Called on logout.
    pub fn reset_session(&mut self) {
        self.selection.clear();
        self.draft = None;
    }

    /// Open the add form with an empty draft. An already open draft is kept.
    pub fn open_draft(&mut self) -> &mut DraftEntry {
        self.draft.get_or_insert_with(DraftEntry::new)
    }

    /// Set one field of the open draft, opening one first if needed.
    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.open_draft().set(field, value);
    }

    /// Close the add form without saving.
    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Submit the open draft through [`CatalogStore::add_entry`].
    ///
    /// On failure the draft stays open and untouched. With no draft open
    /// this behaves like submitting an empty one.
    pub fn submit_draft(&mut self) -> Result<(), CatalogError> {
        let draft = self.draft.take().unwrap_or_default();
        let result = self.add_entry(&draft);
        if result.is_err() {
            self.draft = Some(draft);
        }
        result
    }

    /// Persist `next` and make it the current catalog.
    fn commit(&mut self, next: Catalog) -> Result<(), CatalogError> {
        let json = next.to_json()?;
        self.storage.save(storage_keys::BLOGS, &json);
        self.catalog = next;
        Ok(())
    }
}
