//! Unified error handling for the storefront library.
//!
//! Cart and wishlist commands never fail: store problems are logged and the
//! machines carry on from their in-memory state. The errors here cover
//! startup (configuration, catalog, store setup) and catalog lookups.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The persistent store could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, AppError>;
