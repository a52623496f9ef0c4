//! Infrastructure adapters and configuration

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod platform;
