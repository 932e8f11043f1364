//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ATELIER_DATA_DIR` - Directory for persisted cart/wishlist state (default: .atelier)
//! - `ATELIER_CART_KEY` - Store key for the cart snapshot (default: cart)
//! - `ATELIER_WISHLIST_KEY` - Store key for the wishlist snapshot (default: wishlist)
//! - `ATELIER_CATALOG_PATH` - JSON catalog to load instead of the built-in one
//! - `ATELIER_FREE_SHIPPING_OVER` - Subtotal above which shipping is free (default: 2999)
//! - `ATELIER_SHIPPING_FEE` - Flat shipping fee below the threshold (default: 199)

use std::path::PathBuf;

use atelier_core::Price;
use thiserror::Error;

use crate::summary::ShippingPolicy;

const DEFAULT_DATA_DIR: &str = ".atelier";
const DEFAULT_CART_KEY: &str = "cart";
const DEFAULT_WISHLIST_KEY: &str = "wishlist";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding one JSON file per store key
    pub data_dir: PathBuf,
    /// Store key for the serialized cart line items
    pub cart_key: String,
    /// Store key for the serialized wishlist entries
    pub wishlist_key: String,
    /// Catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Shipping rules for the order summary
    pub shipping: ShippingPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            wishlist_key: DEFAULT_WISHLIST_KEY.to_string(),
            catalog_path: None,
            shipping: ShippingPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = ShippingPolicy::default();
        let shipping = ShippingPolicy {
            free_over: get_price_or_default("ATELIER_FREE_SHIPPING_OVER", defaults.free_over)?,
            flat_fee: get_price_or_default("ATELIER_SHIPPING_FEE", defaults.flat_fee)?,
        };

        Ok(Self {
            data_dir: PathBuf::from(get_env_or_default("ATELIER_DATA_DIR", DEFAULT_DATA_DIR)),
            cart_key: get_env_or_default("ATELIER_CART_KEY", DEFAULT_CART_KEY),
            wishlist_key: get_env_or_default("ATELIER_WISHLIST_KEY", DEFAULT_WISHLIST_KEY),
            catalog_path: get_optional_env("ATELIER_CATALOG_PATH").map(PathBuf::from),
            shipping,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Get a price-valued environment variable with a default value.
fn get_price_or_default(key: &str, default: Price) -> Result<Price, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |value| parse_price(key, &value))
}

fn parse_price(key: &str, value: &str) -> Result<Price, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Price::new)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
