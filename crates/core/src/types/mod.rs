//! Core types for Atelier.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod size;

pub use id::{LineKey, ProductId};
pub use price::Price;
pub use product::Product;
pub use size::{Size, SizeError};
