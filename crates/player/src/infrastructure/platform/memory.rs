//! In-memory storage provider
//!
//! Clones share the same map, so a test can hand one clone to a store and
//! inspect what was written through the other.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::StorageProvider;

/// Storage provider backed by a shared `HashMap`
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        match self.data.read() {
            Ok(guard) => guard.len(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.data.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorageProvider::new();
        storage.save("k", "v");
        assert_eq!(storage.load("k").as_deref(), Some("v"));
        assert_eq!(storage.load("missing"), None);
    }

    #[test]
    fn test_clones_share_data() {
        let storage = MemoryStorageProvider::new();
        let other = storage.clone();

        other.save("k", "v");
        assert_eq!(storage.load("k").as_deref(), Some("v"));

        storage.remove("k");
        assert!(other.is_empty());
    }
}
