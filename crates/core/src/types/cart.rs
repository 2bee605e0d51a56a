//! Cart line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::product::ProductSlug;

/// A single cart line as submitted by the client: which product, how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Slug of the product in the cart.
    pub slug: ProductSlug,
    /// Number of units, always positive.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a cart line.
    pub fn new(slug: impl Into<ProductSlug>, quantity: u32) -> Self {
        Self {
            slug: slug.into(),
            quantity,
        }
    }
}

/// A cart line enriched with the authoritative catalog price.
///
/// Produced during evaluation by joining cart lines against the catalog;
/// the `price` field never comes from client-supplied cart state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLineItem {
    /// Slug of the product in the cart.
    pub slug: ProductSlug,
    /// Number of units on this line.
    pub quantity: u32,
    /// Unit price fetched from the catalog.
    pub price: Decimal,
}

impl PricedLineItem {
    /// Extended price for the line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = PricedLineItem {
            slug: ProductSlug::from("tea-towel"),
            quantity: 3,
            price: Decimal::new(1050, 2), // 10.50
        };
        assert_eq!(line.line_total(), Decimal::new(3150, 2));
    }

    #[test]
    fn test_line_total_single_unit() {
        let line = PricedLineItem {
            slug: ProductSlug::from("stock-pot"),
            quantity: 1,
            price: Decimal::from(100),
        };
        assert_eq!(line.line_total(), Decimal::from(100));
    }
}
