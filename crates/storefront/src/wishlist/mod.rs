//! Wishlist state machine with a hydration gate.
//!
//! Until [`Wishlist::hydrate`] has read the store, commands still update the
//! in-memory state but their writes are held back and the commands are
//! queued. Hydration loads the persisted entries, replays the queue on top
//! and only then writes, so the empty startup state can never overwrite a
//! saved wishlist.

mod state;

use std::sync::Arc;

use atelier_core::{Product, ProductId};
use chrono::SubsecRound;
use tracing::{debug, error, info, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::lifecycle::Lifecycle;
use crate::store::SharedStore;

pub use state::{WishlistCommand, WishlistEntry, WishlistState, transition};

/// The wishlist service.
pub struct Wishlist {
    state: WishlistState,
    store: SharedStore,
    key: String,
    clock: Arc<dyn Clock>,
    lifecycle: Lifecycle,
    pending: Vec<WishlistCommand>,
}

impl std::fmt::Debug for Wishlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wishlist")
            .field("state", &self.state)
            .field("key", &self.key)
            .field("lifecycle", &self.lifecycle)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl Wishlist {
    /// Create an empty, not yet hydrated wishlist persisting under `key`.
    ///
    /// Call [`Wishlist::hydrate`] before handing the wishlist out. Until then
    /// nothing is written and every command is held in memory for replay.
    /// [`AppState`](crate::AppState) hydrates on construction.
    #[must_use]
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self::with_clock(store, key, Arc::new(SystemClock))
    }

    /// Like [`Wishlist::new`] with an explicit time source.
    #[must_use]
    pub fn with_clock(store: SharedStore, key: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: WishlistState::new(),
            store,
            key: key.into(),
            clock,
            lifecycle: Lifecycle::Uninitialized,
            pending: Vec::new(),
        }
    }

    /// Seed the wishlist from the store, once, then open the write gate.
    ///
    /// A payload that is not a JSON array leaves the wishlist empty; array
    /// elements that are not valid entries are skipped. Both are logged and
    /// never reported to the caller.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn hydrate(&mut self) {
        if !self.lifecycle.begin_loading() {
            debug!("Wishlist already hydrated");
            return;
        }

        let items = self.read_snapshot().unwrap_or_default();
        let mut state = transition(&WishlistState::new(), WishlistCommand::Load { items });
        info!(entries = state.len(), "Restored saved wishlist");

        let pending = std::mem::take(&mut self.pending);
        let replayed = pending.len();
        for command in pending {
            state = transition(&state, command);
        }
        self.state = state;
        self.lifecycle.finish_loading();

        if replayed > 0 {
            debug!(replayed, "Replayed wishlist commands issued before hydration");
            self.persist();
        }
    }

    /// Favorite `product`, stamped with the current time. No-op if present.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) {
        let added_at = self.clock.now().trunc_subsecs(3);
        self.dispatch(WishlistCommand::AddItem {
            product: product.clone(),
            added_at,
        });
    }

    /// Remove the entry for `product_id`, if any.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.dispatch(WishlistCommand::RemoveItem {
            product_id: product_id.clone(),
        });
    }

    /// Add `product` if absent, remove it if present.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(&product.id) {
            self.remove_item(&product.id);
            false
        } else {
            self.add_item(product);
            true
        }
    }

    /// Remove every entry.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.dispatch(WishlistCommand::Clear);
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.state.contains(product_id)
    }

    /// Apply a command and, once hydrated, persist the result.
    ///
    /// Before hydration the command is queued for replay instead of written.
    /// Afterwards the store is written whenever the state changed, and
    /// always for `Clear`.
    pub fn dispatch(&mut self, command: WishlistCommand) {
        let ready = self.lifecycle.is_ready();
        if !ready {
            debug!(pending = self.pending.len() + 1, "Deferring wishlist write until hydrated");
            self.pending.push(command.clone());
        }

        let always_persist = matches!(command, WishlistCommand::Clear);
        let next = transition(&self.state, command);
        let changed = next != self.state;
        self.state = next;

        if ready && (changed || always_persist) {
            self.persist();
        }
    }

    #[must_use]
    pub const fn state(&self) -> &WishlistState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistEntry] {
        self.state.items()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Commands waiting for [`Wishlist::hydrate`] to replay them.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn read_snapshot(&self) -> Option<Vec<WishlistEntry>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved wishlist");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved wishlist, starting empty");
                return None;
            }
        };

        match decode_snapshot(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(error = %e, "Discarding malformed saved wishlist");
                None
            }
        }
    }

    fn persist(&self) {
        let json = match encode_snapshot(self.state.items()) {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to encode wishlist");
                return;
            }
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => debug!(key = %self.key, entries = self.state.len(), "Saved wishlist"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to save wishlist"),
        }
    }
}

// =============================================================================
// Snapshot Codec
// =============================================================================

/// Serialize wishlist entries into the persisted JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(items: &[WishlistEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parse a persisted wishlist.
///
/// The payload must be a JSON array. Elements that do not parse as entries
/// are skipped.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON array.
pub fn decode_snapshot(raw: &str) -> Result<Vec<WishlistEntry>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = values.len();
    let items: Vec<WishlistEntry> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if items.len() < total {
        warn!(skipped = total - items.len(), "Skipped invalid saved wishlist entries");
    }
    Ok(items)
}
