//! Wishlist commands.

use atelier_core::ProductId;
use atelier_storefront::{AppState, Result};
use tracing::info;

/// Print wishlist entries with the date each was added.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let wishlist = state.wishlist();
    if wishlist.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }

    let plural = if wishlist.len() == 1 { "" } else { "s" };
    println!("{} item{plural} in your wishlist", wishlist.len());
    for entry in wishlist.items() {
        println!(
            "{:>4}  {:<28} {:>9}  added {}",
            entry.product.id,
            entry.product.name,
            entry.product.price,
            entry.date_added.format("%Y-%m-%d %H:%M")
        );
    }
}

/// # Errors
///
/// Returns `AppError::NotFound` if the id is not in the catalog.
pub fn add(state: &mut AppState, id: &str) -> Result<()> {
    state.add_to_wishlist(&ProductId::new(id))?;
    info!(product_id = id, "Added to wishlist");
    Ok(())
}

pub fn remove(state: &mut AppState, id: &str) {
    state.wishlist_mut().remove_item(&ProductId::new(id));
    info!(product_id = id, "Removed from wishlist");
}

/// # Errors
///
/// Returns `AppError::NotFound` if the id is not in the catalog.
pub fn toggle(state: &mut AppState, id: &str) -> Result<()> {
    let added = state.toggle_wishlist(&ProductId::new(id))?;
    if added {
        info!(product_id = id, "Added to wishlist");
    } else {
        info!(product_id = id, "Removed from wishlist");
    }
    Ok(())
}

/// Print and return whether a product is wishlisted.
#[allow(clippy::print_stdout)]
pub fn contains(state: &AppState, id: &str) -> bool {
    let present = state.wishlist().is_in_wishlist(&ProductId::new(id));
    println!("{}", if present { "yes" } else { "no" });
    present
}

/// # Errors
///
/// Returns `AppError::NotFound` if the product is not wishlisted.
pub fn to_cart(state: &mut AppState, id: &str) -> Result<()> {
    state.wishlist_to_cart(&ProductId::new(id))?;
    info!(product_id = id, "Added to cart from wishlist");
    Ok(())
}

pub fn clear(state: &mut AppState) {
    state.wishlist_mut().clear();
    info!("Wishlist cleared");
}
