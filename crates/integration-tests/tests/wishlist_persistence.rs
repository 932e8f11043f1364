//! Integration tests for wishlist persistence and its hydration gate.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use atelier_core::ProductId;
use atelier_integration_tests::TestContext;
use atelier_storefront::catalog::Catalog;
use atelier_storefront::clock::FixedClock;
use atelier_storefront::lifecycle::Lifecycle;
use atelier_storefront::store::{FileStore, SharedStore};
use atelier_storefront::wishlist::Wishlist;
use atelier_storefront::AppState;
use chrono::{TimeZone, Utc};

#[test]
fn test_wishlist_survives_restart_with_original_dates() {
    let ctx = TestContext::new();
    let first_added = {
        let mut app = ctx.open();
        app.add_to_wishlist(&ProductId::new("6")).unwrap();
        app.add_to_wishlist(&ProductId::new("9")).unwrap();
        app.wishlist().items()[0].date_added
    };

    let mut app = ctx.open();
    assert_eq!(app.wishlist().len(), 2);
    assert_eq!(app.wishlist().items()[0].date_added, first_added);

    // Re-adding after restart keeps the original timestamp.
    app.add_to_wishlist(&ProductId::new("6")).unwrap();
    assert_eq!(app.wishlist().len(), 2);
    assert_eq!(app.wishlist().items()[0].date_added, first_added);
}

#[test]
fn test_early_commands_do_not_clobber_saved_wishlist() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_wishlist(&ProductId::new("1")).unwrap();
    }
    let before = ctx.raw("wishlist").unwrap();

    let store: SharedStore = Arc::new(FileStore::open(&ctx.config.data_dir).unwrap());
    let catalog = Catalog::builtin().unwrap();
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()));
    let mut wishlist = Wishlist::with_clock(store.clone(), "wishlist", clock);

    // Mounted but not hydrated yet: the command must not hit the store.
    wishlist.add_item(catalog.get(&ProductId::new("2")).unwrap());
    assert_eq!(wishlist.lifecycle(), Lifecycle::Uninitialized);
    assert_eq!(ctx.raw("wishlist").unwrap(), before);

    let cart = atelier_storefront::cart::Cart::new(store, "cart");
    let app = AppState::from_parts(ctx.config.clone(), catalog, cart, wishlist);

    let ids: Vec<&str> = app
        .wishlist()
        .items()
        .iter()
        .map(|e| e.product.id.as_str())
        .collect();
    assert_eq!(ids, ["1", "2"]);
    assert!(ctx.raw("wishlist").unwrap().contains("2026-10-19T09:00:00.000Z"));
}

#[test]
fn test_corrupt_wishlist_file_starts_empty() {
    let ctx = TestContext::new();
    ctx.seed("wishlist", "{\"items\": \"nope\"}");

    let app = ctx.open();
    assert!(app.wishlist().is_empty());
    assert!(app.wishlist().lifecycle().is_ready());
}

#[test]
fn test_toggle_and_to_cart_across_restart() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        assert!(app.toggle_wishlist(&ProductId::new("15")).unwrap());
        assert!(app.toggle_wishlist(&ProductId::new("16")).unwrap());
        assert!(!app.toggle_wishlist(&ProductId::new("16")).unwrap());
    }

    let mut app = ctx.open();
    assert!(app.wishlist().is_in_wishlist(&ProductId::new("15")));
    assert!(!app.wishlist().is_in_wishlist(&ProductId::new("16")));

    app.wishlist_to_cart(&ProductId::new("15")).unwrap();
    drop(app);

    let app = ctx.open();
    assert_eq!(app.cart().items()[0].line_key.as_str(), "15");
    assert!(app.wishlist().is_in_wishlist(&ProductId::new("15")));
}

#[test]
fn test_clear_wishlist_persists() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_wishlist(&ProductId::new("4")).unwrap();
        app.wishlist_mut().clear();
    }
    assert_eq!(ctx.raw("wishlist").as_deref(), Some("[]"));
    assert!(ctx.open().wishlist().is_empty());
}

#[test]
fn test_cart_and_wishlist_use_separate_keys() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_cart(&ProductId::new("7"), Some("S")).unwrap();
        app.add_to_wishlist(&ProductId::new("8")).unwrap();
    }

    let cart: serde_json::Value = serde_json::from_str(&ctx.raw("cart").unwrap()).unwrap();
    let wishlist: serde_json::Value = serde_json::from_str(&ctx.raw("wishlist").unwrap()).unwrap();
    assert_eq!(cart[0]["lineKey"], "7-S");
    assert_eq!(wishlist[0]["id"], "8");
    assert!(wishlist[0].get("quantity").is_none());
}
