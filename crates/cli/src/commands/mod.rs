//! Command implementations.
//!
//! Each command mutates [`atelier_storefront::AppState`] and prints the
//! result to stdout. Logging goes to stderr.

pub mod cart;
pub mod catalog;
pub mod wishlist;
