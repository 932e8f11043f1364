//! Atelier Storefront library.
//!
//! The state core of the storefront: a read-only catalog plus the cart and
//! wishlist state machines, persisted as JSON snapshots in a key-value store.
//!
//! # Modules
//!
//! - [`catalog`] - Product list and lookup by id
//! - [`cart`] - Cart line items, derived total, snapshot persistence
//! - [`wishlist`] - Favorited products with a hydration write gate
//! - [`store`] - Key-value store trait with memory and file backends
//! - [`state`] - [`AppState`], the single owner handed to the front end

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod state;
pub mod store;
pub mod summary;
pub mod wishlist;

pub use error::{AppError, Result};
pub use state::AppState;
