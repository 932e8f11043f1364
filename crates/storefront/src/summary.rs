//! Order summary shown beside the cart: subtotal, shipping and total.

use atelier_core::Price;

use crate::cart::CartState;

/// Flat-rate shipping that becomes free above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Orders with a subtotal strictly above this ship free.
    pub free_over: Price,
    /// Fee charged otherwise.
    pub flat_fee: Price,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_over: Price::new(2999),
            flat_fee: Price::new(199),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for a given subtotal. An empty cart ships nothing.
    #[must_use]
    pub fn shipping_for(&self, subtotal: Price) -> Price {
        if subtotal.is_zero() || subtotal > self.free_over {
            Price::ZERO
        } else {
            self.flat_fee
        }
    }
}

/// Totals derived from a cart under a shipping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// The cart total, excluding shipping.
    pub subtotal: Price,
    pub shipping: Price,
    pub grand_total: Price,
    /// Units across all lines.
    pub item_count: u64,
}

impl OrderSummary {
    #[must_use]
    pub fn from_cart(cart: &CartState, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.total();
        let shipping = policy.shipping_for(subtotal);
        Self {
            subtotal,
            shipping,
            grand_total: subtotal.plus(shipping),
            item_count: cart.item_count(),
        }
    }

    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}
