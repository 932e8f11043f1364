//! Shopping cart state machine.
//!
//! [`Cart`] owns the cart state and funnels every mutation through
//! [`Cart::dispatch`], which applies the pure [`transition`] and then writes
//! the full item list to the store. Writes are whole snapshots, so a write
//! that lands late is simply superseded by the next one.
//!
//! # Persisted shape
//!
//! A JSON array of line items with camelCase fields:
//!
//! ```json
//! [{"id":"3","name":"Wrap Blouse","description":"...","price":2999,
//!   "image":"/images/tops/wrapBlouse.webp","category":"Tops",
//!   "quantity":1,"selectedSize":"M","lineKey":"3-M"}]
//! ```
//!
//! Older snapshots may lack `lineKey` (or call it `cartId`); the key is
//! rebuilt from `id` and `selectedSize` on load.

mod state;

use atelier_core::{LineKey, Price, Product};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use crate::lifecycle::Lifecycle;
use crate::store::SharedStore;

pub use state::{CartCommand, CartLineItem, CartState, transition};

/// The shopping cart service.
pub struct Cart {
    state: CartState,
    store: SharedStore,
    key: String,
    lifecycle: Lifecycle,
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("state", &self.state)
            .field("key", &self.key)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl Cart {
    /// Create an empty, not yet hydrated cart persisting under `key`.
    #[must_use]
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self {
            state: CartState::new(),
            store,
            key: key.into(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Seed the cart from the store, once.
    ///
    /// An absent, unreadable or malformed snapshot leaves the cart empty; the
    /// condition is logged and never reported to the caller.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn hydrate(&mut self) {
        if !self.lifecycle.begin_loading() {
            debug!("Cart already hydrated");
            return;
        }

        if let Some(items) = self.read_snapshot() {
            info!(lines = items.len(), "Restored saved cart");
            self.dispatch(CartCommand::Load { items });
        }

        self.lifecycle.finish_loading();
    }

    /// Add one unit of `product` in the given size.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product, selected_size: Option<&str>) {
        self.dispatch(CartCommand::AddItem {
            product: product.clone(),
            selected_size: selected_size.map(str::to_string),
        });
    }

    /// Remove the line with `line_key`, if any.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, line_key: &LineKey) {
        self.dispatch(CartCommand::RemoveItem {
            line_key: line_key.clone(),
        });
    }

    /// Set the quantity of a line; zero or less removes it.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, line_key: &LineKey, quantity: i64) {
        self.dispatch(CartCommand::UpdateQuantity {
            line_key: line_key.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.dispatch(CartCommand::Clear);
    }

    /// Apply a command and persist the result.
    ///
    /// The store is written whenever the state changed, and always for
    /// `Clear`. Commands are accepted in every lifecycle state.
    pub fn dispatch(&mut self, command: CartCommand) {
        let always_persist = matches!(command, CartCommand::Clear);
        let next = transition(&self.state, command);
        let changed = next != self.state;
        self.state = next;

        if changed || always_persist {
            self.persist();
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    #[must_use]
    pub const fn total(&self) -> Price {
        self.state.total()
    }

    /// Total units across all lines, as shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn read_snapshot(&self) -> Option<Vec<CartLineItem>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved cart");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved cart, starting empty");
                return None;
            }
        };

        match decode_snapshot(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(error = %e, "Discarding malformed saved cart");
                None
            }
        }
    }

    fn persist(&self) {
        let json = match encode_snapshot(self.state.items()) {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to encode cart");
                return;
            }
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => debug!(key = %self.key, lines = self.state.items().len(), "Saved cart"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to save cart"),
        }
    }
}

// =============================================================================
// Snapshot Codec
// =============================================================================

/// A line as found in the store, possibly written by an older release.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLine {
    #[serde(flatten)]
    product: Product,
    quantity: i64,
    #[serde(default)]
    selected_size: Option<String>,
    #[serde(default)]
    line_key: Option<LineKey>,
    /// Older name for `lineKey`; only consulted when `lineKey` is absent.
    #[serde(default)]
    cart_id: Option<LineKey>,
}

impl StoredLine {
    /// Convert into a line item; lines with a quantity below 1 are dropped.
    fn into_line_item(self) -> Option<CartLineItem> {
        if self.quantity <= 0 {
            return None;
        }

        let selected_size = self.selected_size.filter(|size| !size.is_empty());
        let line_key = self
            .line_key
            .filter(|key| !key.as_str().is_empty())
            .or_else(|| self.cart_id.filter(|key| !key.as_str().is_empty()))
            .unwrap_or_else(|| LineKey::for_product(&self.product.id, selected_size.as_deref()));

        Some(CartLineItem {
            product: self.product,
            quantity: u32::try_from(self.quantity).unwrap_or(u32::MAX),
            selected_size,
            line_key,
        })
    }
}

/// Serialize cart lines into the persisted JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(items: &[CartLineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parse a persisted JSON array of cart lines.
///
/// Missing line keys are rebuilt the same way [`CartCommand::AddItem`]
/// derives them. Elements that are not valid line records, and lines with a
/// non-positive quantity, are dropped.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON array.
pub fn decode_snapshot(raw: &str) -> Result<Vec<CartLineItem>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = values.len();
    let items: Vec<CartLineItem> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<StoredLine>(value) {
            Ok(line) => line.into_line_item(),
            Err(e) => {
                warn!(error = %e, "Skipping invalid saved cart line");
                None
            }
        })
        .collect();

    if items.len() < total {
        warn!(dropped = total - items.len(), "Dropped saved cart lines");
    }
    Ok(items)
}
