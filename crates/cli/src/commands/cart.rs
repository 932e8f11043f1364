//! Cart commands.

use atelier_core::{LineKey, ProductId, Size};
use atelier_storefront::{AppState, Result};
use tracing::info;

/// Print cart lines followed by the order summary.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let cart = state.cart();
    if cart.items().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in cart.items() {
        println!(
            "{:<8} {:<28} {:>3} x {:>9} = {:>10}",
            item.line_key,
            item.product.name,
            item.quantity,
            item.product.price,
            item.line_total()
        );
    }

    let summary = state.summary();
    let shipping = if summary.ships_free() {
        "Free".to_string()
    } else {
        summary.shipping.to_string()
    };
    println!();
    println!("Items:    {}", summary.item_count);
    println!("Subtotal: {}", summary.subtotal);
    println!("Shipping: {shipping}");
    println!("Total:    {}", summary.grand_total);
}

/// Add one unit of a product, optionally sized.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the id is not in the catalog.
pub fn add(state: &mut AppState, id: &str, size: Option<Size>) -> Result<()> {
    state.add_to_cart(&ProductId::new(id), size.map(Size::as_str))?;
    info!(product_id = id, size = ?size, items = state.cart().item_count(), "Added to cart");
    Ok(())
}

pub fn remove(state: &mut AppState, line_key: &str) {
    state.cart_mut().remove_item(&LineKey::new(line_key));
    info!(line_key, "Removed from cart");
}

pub fn update(state: &mut AppState, line_key: &str, quantity: i64) {
    state
        .cart_mut()
        .update_quantity(&LineKey::new(line_key), quantity);
    info!(line_key, quantity, total = %state.cart().total(), "Updated cart");
}

pub fn clear(state: &mut AppState) {
    state.cart_mut().clear();
    info!("Cart cleared");
}
