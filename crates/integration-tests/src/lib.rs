//! Integration tests for Saltbox.
//!
//! Shared fixtures for exercising the promo evaluation engine end to end
//! against the in-memory reference stores.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saltbox-integration-tests
//! ```
//!
//! Set `RUST_LOG=saltbox_promo=debug` to see evaluation decisions while a
//! test runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use rust_decimal::Decimal;

use saltbox_core::{CartLineItem, ProductRecord, ProductSlug, PromoCode};
use saltbox_promo::InMemoryCatalog;

/// Install a tracing subscriber once so `RUST_LOG` filters test output.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A minimal active promo record; tests toggle the fields they care about.
#[must_use]
pub fn base_promo(code: &str) -> PromoCode {
    PromoCode {
        code: code.to_string(),
        is_active: true,
        percentage_off: Decimal::ZERO,
        is_bogo: false,
        bogo_buy_count: 0,
        bogo_get_count: 0,
        free_shipping: false,
        all_cart: false,
        eligible_product_slugs: Vec::new(),
        eligible_customer_ids: Vec::new(),
    }
}

/// A catalog record with an integer price.
#[must_use]
pub fn product(slug: &str, price: i64) -> ProductRecord {
    ProductRecord {
        slug: ProductSlug::from(slug),
        title: slug.to_string(),
        price: Decimal::from(price),
    }
}

/// A cart line for `slug`.
#[must_use]
pub fn line(slug: &str, quantity: u32) -> CartLineItem {
    CartLineItem::new(slug, quantity)
}

/// The standard three-product test catalog: tea-towel 10, cutting-board 20,
/// stock-pot 100.
#[must_use]
pub fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with(product("tea-towel", 10))
        .with(product("cutting-board", 20))
        .with(product("stock-pot", 100))
}
