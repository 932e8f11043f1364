//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A product as listed in the catalog.
///
/// Products are immutable once loaded; cart lines and wishlist entries
/// embed a copy of the record taken when the shopper added it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-unique identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price in whole currency units.
    pub price: Price,
    /// Image path relative to the storefront's static assets.
    pub image: String,
    pub category: String,
}
