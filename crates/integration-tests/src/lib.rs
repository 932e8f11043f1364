//! Integration tests for Atelier.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart state surviving restarts through the file store
//! - `wishlist_persistence` - Wishlist state and its hydration gate across restarts
//!
//! Each test gets its own temporary data directory via [`TestContext`], so
//! "restarting the process" means opening a fresh [`AppState`] on it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use atelier_storefront::AppState;
use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::store::{FileStore, KeyValueStore};
use tempfile::TempDir;

/// A throwaway data directory plus the config pointing at it.
pub struct TestContext {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = StorefrontConfig {
            data_dir: dir.path().join("state"),
            ..StorefrontConfig::default()
        };
        Self { dir, config }
    }

    /// Open the storefront, as a fresh process would.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open(&self) -> AppState {
        AppState::open(self.config.clone()).expect("failed to open app state")
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Raw persisted value for `key`, bypassing the state machines.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be read.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn raw(&self, key: &str) -> Option<String> {
        FileStore::open(&self.config.data_dir)
            .and_then(|store| store.get(key))
            .expect("failed to read store")
    }

    /// Overwrite the persisted value for `key`, as an older release or a
    /// corrupted disk might have left it.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be written.
    #[allow(clippy::expect_used)]
    pub fn seed(&self, key: &str, value: &str) {
        FileStore::open(&self.config.data_dir)
            .and_then(|store| store.set(key, value))
            .expect("failed to seed store");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
