//! Platform abstraction ports
//!
//! Storage is the only platform service the catalog needs. Keeping it behind
//! a trait lets the same store run against a JSON file on desktop, browser
//! `localStorage` on wasm32, or an in-memory map in tests.

/// Persistent key-value storage (localStorage/file-based)
///
/// Implementations are synchronous and survive process restarts. They log
/// their own I/O failures rather than returning them.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

#[cfg(any(test, feature = "testing"))]
mockall::mock! {
    /// Mock implementation of StorageProvider for testing.
    pub StorageProvider {}

    impl Clone for StorageProvider {
        fn clone(&self) -> Self;
    }

    impl StorageProvider for StorageProvider {
        fn save(&self, key: &str, value: &str);
        fn load(&self, key: &str) -> Option<String>;
        fn remove(&self, key: &str);
    }
}

/// Storage key constants
///
/// These define the contract for what keys are shared with the web front end.
pub mod storage_keys {
    /// Serialized catalog snapshot (JSON array of entries)
    pub const BLOGS: &str = "blogs";
    /// Role name of the simulated logged-in user
    pub const LOGGED_IN_USER: &str = "loggedInUser";
}
