//! Integration tests for cart persistence across restarts.
//!
//! Every test writes through a real `FileStore` in a temporary directory and
//! then opens a fresh `AppState` to observe what a new process would see.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use atelier_core::{LineKey, Price, ProductId};
use atelier_integration_tests::TestContext;
use atelier_storefront::AppError;
use atelier_storefront::catalog::Catalog;

// =============================================================================
// Restart Scenarios
// =============================================================================

#[test]
fn test_cart_survives_restart() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_cart(&ProductId::new("1"), None).unwrap();
        app.add_to_cart(&ProductId::new("1"), None).unwrap();
        app.add_to_cart(&ProductId::new("3"), Some("M")).unwrap();
        app.add_to_cart(&ProductId::new("3"), Some("L")).unwrap();
    }

    let app = ctx.open();
    let keys: Vec<&str> = app.cart().items().iter().map(|i| i.line_key.as_str()).collect();
    assert_eq!(keys, ["1", "3-M", "3-L"]);
    assert_eq!(app.cart().items()[0].quantity, 2);
    assert_eq!(app.cart().total(), Price::new(4999 * 2 + 2999 * 2));
}

#[test]
fn test_add_twice_then_zero_quantity() {
    let ctx = TestContext::new();
    let mut app = ctx.open();
    let id = ProductId::new("1");

    app.add_to_cart(&id, None).unwrap();
    assert_eq!(app.cart().total(), Price::new(4999));

    app.add_to_cart(&id, None).unwrap();
    assert_eq!(app.cart().items()[0].quantity, 2);
    assert_eq!(app.cart().total(), Price::new(9998));

    app.cart_mut().update_quantity(&LineKey::new("1"), 0);
    assert!(app.cart().items().is_empty());
    assert_eq!(app.cart().total(), Price::ZERO);
    assert_eq!(ctx.raw("cart").as_deref(), Some("[]"));

    drop(app);
    assert!(ctx.open().cart().items().is_empty());
}

#[test]
fn test_clear_persists_empty_cart() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_cart(&ProductId::new("5"), Some("XS")).unwrap();
        app.cart_mut().clear();
    }
    assert!(ctx.open().cart().items().is_empty());
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn test_corrupt_cart_file_starts_empty_and_heals() {
    let ctx = TestContext::new();
    ctx.seed("cart", "{ this is not json");

    let mut app = ctx.open();
    assert!(app.cart().items().is_empty());

    app.add_to_cart(&ProductId::new("2"), None).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&ctx.raw("cart").unwrap()).unwrap();
    assert_eq!(raw[0]["lineKey"], "2");
}

#[test]
fn test_legacy_cart_without_line_keys() {
    let ctx = TestContext::new();
    ctx.seed(
        "cart",
        r#"[
            {"id":"3","name":"Wrap Blouse","description":"d","price":2999,
             "image":"/images/tops/wrapBlouse.webp","category":"Tops",
             "quantity":1,"selectedSize":"M"},
            {"id":"6","name":"Silk Camisole","description":"d","price":2499,
             "image":"/images/tops/camisole.avif","category":"Tops","quantity":3}
        ]"#,
    );

    let mut app = ctx.open();
    let keys: Vec<&str> = app.cart().items().iter().map(|i| i.line_key.as_str()).collect();
    assert_eq!(keys, ["3-M", "6"]);
    assert_eq!(app.cart().total(), Price::new(2999 + 2499 * 3));

    // Adding the same product/size merges into the recovered line.
    app.add_to_cart(&ProductId::new("3"), Some("M")).unwrap();
    assert_eq!(app.cart().items().len(), 2);
    assert_eq!(app.cart().items()[0].quantity, 2);
}

#[test]
fn test_unknown_product_is_not_found() {
    let ctx = TestContext::new();
    let mut app = ctx.open();

    let err = app.add_to_cart(&ProductId::new("404"), None).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(ctx.raw("cart"), None);
}

#[test]
fn test_custom_catalog_and_keys() {
    let mut ctx = TestContext::new();
    let catalog_path = ctx.root().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"[{"id":"sku-1","name":"Scarf","description":"","price":799,"image":"","category":"Accessories"}]"#,
    )
    .unwrap();
    ctx.config.catalog_path = Some(catalog_path);
    ctx.config.cart_key = "cart_v2".to_string();

    let mut app = ctx.open();
    assert_eq!(app.catalog().len(), 1);
    app.add_to_cart(&ProductId::new("sku-1"), None).unwrap();

    assert!(ctx.raw("cart_v2").is_some());
    assert!(ctx.raw("cart").is_none());
    assert_ne!(app.catalog(), &Catalog::builtin().unwrap());
}

#[test]
fn test_summary_after_restart() {
    let ctx = TestContext::new();
    {
        let mut app = ctx.open();
        app.add_to_cart(&ProductId::new("11"), None).unwrap();
    }

    let summary = ctx.open().summary();
    assert_eq!(summary.subtotal, Price::new(1599));
    assert_eq!(summary.shipping, Price::new(199));
    assert_eq!(summary.grand_total, Price::new(1798));
}

#[test]
fn test_mixed_legacy_and_broken_lines_keep_the_good_ones() {
    let ctx = TestContext::new();
    ctx.seed(
        "cart",
        r#"[
            {"id":"3","name":"Wrap Blouse","description":"d","price":2999,
             "image":"/images/tops/wrapBlouse.webp","category":"Tops",
             "quantity":1,"selectedSize":"M","cartId":"3-M","lineKey":"3-M"},
            {"id":"4","name":"n","price":10,"quantity":1}
        ]"#,
    );

    let mut app = ctx.open();
    assert_eq!(app.cart().items().len(), 1);
    assert_eq!(app.cart().items()[0].line_key.as_str(), "3-M");

    // The next write keeps the recovered line instead of clobbering it.
    app.add_to_cart(&ProductId::new("1"), None).unwrap();
    drop(app);
    let keys: Vec<String> = ctx
        .open()
        .cart()
        .items()
        .iter()
        .map(|i| i.line_key.as_str().to_string())
        .collect();
    assert_eq!(keys, ["3-M", "1"]);
}
