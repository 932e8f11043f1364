//! Catalog browsing commands.

use atelier_core::ProductId;
use atelier_storefront::{AppState, Result};

/// Print every product, one per line.
#[allow(clippy::print_stdout)]
pub fn list(state: &AppState) {
    for product in state.catalog().iter() {
        println!(
            "{:>4}  {:<28} {:>9}  {}",
            product.id, product.name, product.price, product.category
        );
    }
}

/// Print one product's details.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the id is not in the catalog.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState, id: &str) -> Result<()> {
    let id = ProductId::new(id);
    let product = state.product(&id)?;
    let wishlisted = if state.wishlist().is_in_wishlist(&id) {
        " (in wishlist)"
    } else {
        ""
    };

    println!("{}{wishlisted}", product.name);
    println!("  id:       {}", product.id);
    println!("  price:    {}", product.price);
    println!("  category: {}", product.category);
    println!("  image:    {}", product.image);
    println!("  {}", product.description);
    Ok(())
}
