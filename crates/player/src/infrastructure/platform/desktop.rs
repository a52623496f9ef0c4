//! Desktop platform storage
//!
//! Persists every key in a single JSON object on disk, at the location
//! resolved by [`StorageConfig`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::infrastructure::config::StorageConfig;
use crate::ports::outbound::StorageProvider;

/// Desktop storage provider with file-based persistence
///
/// Reads go to an in-memory cache; every write rewrites the whole file.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new(&StorageConfig::from_env())
    }
}

impl DesktopStorageProvider {
    /// Create a desktop storage provider for the configured file.
    ///
    /// Loads existing data from the storage file if it exists. An unreadable
    /// or unparsable file is logged and treated as empty.
    pub fn new(config: &StorageConfig) -> Self {
        let storage_path = config.path().to_path_buf();
        let cache = Self::read_file(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn read_file(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Failed to parse storage file: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read storage file: {}", e);
                HashMap::new()
            }
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        // Ensure parent directory exists
        let parent = self
            .storage_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let data = match self.cache.read() {
            Ok(guard) => serde_json::to_string_pretty(&*guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match data {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Create the storage provider for desktop builds
pub fn create_storage() -> DesktopStorageProvider {
    DesktopStorageProvider::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CatalogStore;
    use crate::ports::outbound::storage_keys;

    fn provider_in(dir: &tempfile::TempDir) -> DesktopStorageProvider {
        DesktopStorageProvider::new(&StorageConfig::new(dir.path().join("nested/storage.json")))
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");

        provider_in(&dir).save("loggedInUser", "admin");

        let reopened = provider_in(&dir);
        assert_eq!(reopened.load("loggedInUser").as_deref(), Some("admin"));
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = provider_in(&dir);
        storage.save("a", "1");
        storage.save("b", "2");

        storage.remove("a");

        let reopened = provider_in(&dir);
        assert_eq!(reopened.load("a"), None);
        assert_eq!(reopened.load("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_unparsable_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not a json object").expect("write");

        let storage = DesktopStorageProvider::new(&StorageConfig::new(&path));

        assert_eq!(storage.load("blogs"), None);
    }

    #[test]
    fn test_catalog_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut store = CatalogStore::initialize(provider_in(&dir)).expect("seed");
        store.toggle_selection("birth-of-japan");
        store.delete_selected().expect("selection present");
        let expected = store.catalog().clone();

        let reopened = provider_in(&dir);
        assert!(reopened.load(storage_keys::BLOGS).is_some());
        let reloaded = CatalogStore::initialize(reopened).expect("reload");

        assert_eq!(reloaded.catalog(), &expected);
        assert_eq!(reloaded.entries().len(), 11);
    }
}
