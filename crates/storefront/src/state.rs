//! Application state owned by the front end.
//!
//! `AppState` is created once at startup and handed by reference to
//! whatever renders or commands the storefront. It owns the catalog and
//! both state machines, already hydrated.

use std::sync::Arc;

use atelier_core::{Product, ProductId};
use tracing::info;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::store::{FileStore, SharedStore};
use crate::summary::OrderSummary;
use crate::wishlist::Wishlist;

/// Catalog, cart and wishlist for one shopper session.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
}

impl AppState {
    /// Open the storefront described by `config`.
    ///
    /// Uses a [`FileStore`] under `config.data_dir` and the configured or
    /// built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// catalog cannot be loaded. A missing or corrupt saved cart or
    /// wishlist is not an error.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        let store: SharedStore = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_store(config, catalog, store))
    }

    /// Build the state over an arbitrary store and hydrate both machines.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, catalog: Catalog, store: SharedStore) -> Self {
        let cart = Cart::new(store.clone(), config.cart_key.clone());
        let wishlist = Wishlist::new(store, config.wishlist_key.clone());
        Self::from_parts(config, catalog, cart, wishlist)
    }

    /// Assemble from pre-built machines, hydrating any that are not ready.
    #[must_use]
    pub fn from_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        mut cart: Cart,
        mut wishlist: Wishlist,
    ) -> Self {
        cart.hydrate();
        wishlist.hydrate();
        info!(
            products = catalog.len(),
            cart_lines = cart.items().len(),
            wishlist_entries = wishlist.len(),
            "Storefront state ready"
        );

        Self {
            config,
            catalog,
            cart,
            wishlist,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    /// Look up a product for its detail view.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn product(&self, id: &ProductId) -> Result<&Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn add_to_cart(&mut self, id: &ProductId, selected_size: Option<&str>) -> Result<()> {
        let product = self.product(id)?.clone();
        self.cart.add_item(&product, selected_size);
        Ok(())
    }

    /// Favorite a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn add_to_wishlist(&mut self, id: &ProductId) -> Result<()> {
        let product = self.product(id)?.clone();
        self.wishlist.add_item(&product);
        Ok(())
    }

    /// Flip a catalog product's wishlist membership.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<bool> {
        let product = self.product(id)?.clone();
        Ok(self.wishlist.toggle(&product))
    }

    /// Add a wishlisted product to the cart, unsized. The wishlist entry stays.
    ///
    /// Uses the product snapshot stored in the wishlist, so this works even
    /// if the product has since left the catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the wishlist.
    pub fn wishlist_to_cart(&mut self, id: &ProductId) -> Result<()> {
        let product = self
            .wishlist
            .state()
            .get(id)
            .map(|entry| entry.product.clone())
            .ok_or_else(|| AppError::NotFound(format!("wishlist entry {id}")))?;
        self.cart.add_item(&product, None);
        Ok(())
    }

    /// Subtotal, shipping and total for the current cart.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_cart(self.cart.state(), &self.config.shipping)
    }
}
