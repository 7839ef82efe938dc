//! Storage configuration (environment variables + defaults).

use std::path::{Path, PathBuf};

use crate::store::{FileStore, StoreError};

/// Key holding the serialized catalog.
pub const INVENTORY_KEY: &str = "inventory";

/// Key holding the serialized transaction log.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "GROCER_DATA_DIR";

/// Data directory used when `GROCER_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = ".grocer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read `GROCER_DATA_DIR`, falling back to `.grocer`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`StoreConfig::from_env`], with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => Self::new(dir),
            None => {
                tracing::debug!(
                    "{DATA_DIR_ENV} not set; using default data directory {DEFAULT_DATA_DIR}"
                );
                Self::new(DEFAULT_DATA_DIR)
            }
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn open_store(&self) -> Result<FileStore, StoreError> {
        FileStore::open(&self.data_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
