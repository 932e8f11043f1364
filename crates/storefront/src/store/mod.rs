//! Persistent key-value storage for cart and wishlist snapshots.
//!
//! The store is the on-device analogue of browser `localStorage`: string
//! keys mapping to string values, no transactions, no history. Callers write
//! whole snapshots and treat whatever they read back as untrusted.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - process-local map, used by tests and throwaway sessions
//! - [`FileStore`] - one JSON file per key inside a data directory

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors returned by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys must be non-empty and made of ASCII letters, digits, `-` or `_`.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    /// The store location could not be prepared.
    #[error("cannot open store at {}: {source}", path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying I/O failed.
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A previous holder of the store lock panicked.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// A string key-value store.
///
/// Implementations use interior mutability so one store can be shared by
/// the cart and the wishlist, each writing only its own key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key is invalid or the value cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key is invalid or the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Store handle shared between the state machines.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Check that a key is safe to use as a file name on every platform.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
