//! Outbound ports - what the player needs from its platform

pub mod platform;

pub use platform::{storage_keys, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use platform::MockStorageProvider;
