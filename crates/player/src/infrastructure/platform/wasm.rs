//! WASM platform storage
//!
//! Uses the browser's `window.localStorage`, which is what the web front end
//! reads and writes directly.

use web_sys::Storage;

use crate::ports::outbound::StorageProvider;

/// Browser localStorage provider
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<Storage> {
        let storage = web_sys::window()?.local_storage();
        match storage {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("localStorage is not accessible: {:?}", e);
                None
            }
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read localStorage key {}: {:?}", key, e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// Create the storage provider for wasm builds
pub fn create_storage() -> WasmStorageProvider {
    WasmStorageProvider
}
