//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the
//! `StorageProvider` port defined in ports/outbound/platform.rs.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_storage, WasmStorageProvider};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{create_storage, DesktopStorageProvider};

pub use memory::MemoryStorageProvider;
