//! Product identity and catalog record types.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// URL-safe product identifier (e.g. `"olive-wood-spoon"`).
///
/// Slugs are the public handle a storefront cart references products by.
/// They are opaque to the engine; no casing or charset rules are enforced
/// here, matching is always exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductSlug(String);

impl ProductSlug {
    /// Create a slug from any string-like value.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for ProductSlug {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// Authoritative catalog row for a single product.
///
/// Prices are always read from the catalog at evaluation time; client-side
/// cart state is never trusted for pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The product's public slug.
    pub slug: ProductSlug,
    /// Display title.
    pub title: String,
    /// Current unit price.
    pub price: Decimal,
}
