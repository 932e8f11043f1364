//! Cart state and its pure transition function.
//!
//! Every command produces a fresh [`CartState`] whose total is recomputed
//! from the item list, so the total can never drift from the lines.

use atelier_core::{LineKey, Price, Product};
use serde::{Deserialize, Serialize};

/// One row in the cart: a product, the chosen size and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product snapshot taken when the line was created.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 for stored lines.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    /// Identity of the line: product id, plus `-<size>` when sized.
    pub line_key: LineKey,
}

impl CartLineItem {
    /// A new line holding one unit of `product`.
    #[must_use]
    pub fn new(product: Product, selected_size: Option<String>) -> Self {
        let selected_size = selected_size.filter(|size| !size.is_empty());
        let line_key = LineKey::for_product(&product.id, selected_size.as_deref());
        Self {
            product,
            quantity: 1,
            selected_size,
            line_key,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Cart contents in insertion order plus their derived total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: Price,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO,
        }
    }

    fn from_items(items: Vec<CartLineItem>) -> Self {
        let total = items.iter().map(CartLineItem::line_total).sum();
        Self { items, total }
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all lines, shipping excluded.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, line_key: &LineKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.line_key == line_key)
    }
}

/// Commands accepted by the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit, merging into an existing line with the same key.
    AddItem {
        product: Product,
        selected_size: Option<String>,
    },
    /// Drop a line.
    RemoveItem { line_key: LineKey },
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity { line_key: LineKey, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace the whole cart, e.g. with recovered persisted lines.
    Load { items: Vec<CartLineItem> },
}

/// Apply `command` to `state`, returning the next state.
#[must_use]
pub fn transition(state: &CartState, command: CartCommand) -> CartState {
    let items = match command {
        CartCommand::AddItem {
            product,
            selected_size,
        } => add_line(&state.items, CartLineItem::new(product, selected_size)),
        CartCommand::RemoveItem { line_key } => without_line(&state.items, &line_key),
        CartCommand::UpdateQuantity { line_key, quantity } => {
            if quantity <= 0 {
                without_line(&state.items, &line_key)
            } else {
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                state
                    .items
                    .iter()
                    .map(|item| {
                        if item.line_key == line_key {
                            CartLineItem {
                                quantity,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect()
            }
        }
        CartCommand::Clear => Vec::new(),
        CartCommand::Load { items } => merge_lines(items),
    };
    CartState::from_items(items)
}

/// Merge `line` into `items`. The existing line keeps its stored price.
fn add_line(items: &[CartLineItem], line: CartLineItem) -> Vec<CartLineItem> {
    let mut next = items.to_vec();
    match next.iter_mut().find(|item| item.line_key == line.line_key) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
        None => next.push(line),
    }
    next
}

fn without_line(items: &[CartLineItem], line_key: &LineKey) -> Vec<CartLineItem> {
    items
        .iter()
        .filter(|item| &item.line_key != line_key)
        .cloned()
        .collect()
}

/// Drop empty lines and fold lines sharing a key into the first of them.
fn merge_lines(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    items
        .into_iter()
        .filter(|item| item.quantity > 0)
        .fold(Vec::new(), |merged, item| add_line(&merged, item))
}
