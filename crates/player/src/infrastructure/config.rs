//! Desktop storage configuration
//!
//! The storage file location is resolved, in order, from:
//! 1. `MOVIEBLOG_STORAGE_PATH`
//! 2. the platform config directory (`ProjectDirs`)
//! 3. `movieblog_storage.json` in the working directory

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the storage file path
pub const STORAGE_PATH_ENV: &str = "MOVIEBLOG_STORAGE_PATH";

const STORAGE_FILE_NAME: &str = "storage.json";
const FALLBACK_STORAGE_FILE: &str = "movieblog_storage.json";

/// Where desktop storage lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    path: PathBuf,
}

impl StorageConfig {
    /// Use an explicit storage file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the storage file from the environment.
    ///
    /// Locations:
    /// - Linux: ~/.config/movieblog/storage.json
    /// - macOS: ~/Library/Application Support/io.movieblog.movieblog/storage.json
    /// - Windows: C:\Users\<User>\AppData\Roaming\movieblog\movieblog\config\storage.json
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(STORAGE_PATH_ENV).ok())
    }

    fn resolve(override_path: Option<String>) -> Self {
        if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
            return Self::new(path.trim());
        }

        match ProjectDirs::from("io", "movieblog", "movieblog") {
            Some(dirs) => Self::new(dirs.config_dir().join(STORAGE_FILE_NAME)),
            None => Self::new(FALLBACK_STORAGE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
