//! Wishlist state and its pure transition function.

use atelier_core::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A favorited product and when it was favorited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub product: Product,
    /// Time of the first add; re-adding never changes it.
    #[serde(with = "iso_millis")]
    pub date_added: DateTime<Utc>,
}

/// Wishlist contents in insertion order, at most one entry per product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WishlistState {
    items: Vec<WishlistEntry>,
}

impl WishlistState {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistEntry] {
        &self.items
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|entry| &entry.product.id == product_id)
    }

    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&WishlistEntry> {
        self.items.iter().find(|entry| &entry.product.id == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Commands accepted by the wishlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistCommand {
    /// Favorite a product. `added_at` is captured when the shopper acts, so
    /// a deferred command keeps its original time.
    AddItem {
        product: Product,
        added_at: DateTime<Utc>,
    },
    RemoveItem { product_id: ProductId },
    Clear,
    /// Replace the whole wishlist, e.g. with recovered persisted entries.
    Load { items: Vec<WishlistEntry> },
}

/// Apply `command` to `state`, returning the next state.
#[must_use]
pub fn transition(state: &WishlistState, command: WishlistCommand) -> WishlistState {
    match command {
        WishlistCommand::AddItem { product, added_at } => {
            if state.contains(&product.id) {
                return state.clone();
            }
            let mut items = state.items.clone();
            items.push(WishlistEntry {
                product,
                date_added: added_at,
            });
            WishlistState { items }
        }
        WishlistCommand::RemoveItem { product_id } => WishlistState {
            items: state
                .items
                .iter()
                .filter(|entry| entry.product.id != product_id)
                .cloned()
                .collect(),
        },
        WishlistCommand::Clear => WishlistState::new(),
        WishlistCommand::Load { items } => {
            let mut unique: Vec<WishlistEntry> = Vec::with_capacity(items.len());
            for entry in items {
                if !unique.iter().any(|kept| kept.product.id == entry.product.id) {
                    unique.push(entry);
                }
            }
            WishlistState { items: unique }
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
