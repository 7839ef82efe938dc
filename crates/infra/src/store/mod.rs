//! Key-value persistence abstraction.
//!
//! The ledger is stored as whole JSON documents under a handful of string
//! keys; every write replaces the previous value.

pub mod file;
pub mod in_memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use in_memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys are plain names: ASCII letters, digits, `_` and `-`.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("failed to serialize value for {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("storage backend failure: {0:#}")]
    Backend(#[from] anyhow::Error),
}

/// Text key-value store (`get`/`set`), the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace whatever is stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
