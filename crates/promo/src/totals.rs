//! Checkout totals math.
//!
//! Applies an evaluated promo to a priced cart the way the checkout screens
//! do: subtract the discount, waive shipping for free-shipping codes, and
//! zero the grand total outright for staff comp codes.

use rust_decimal::Decimal;
use serde::Serialize;

use saltbox_core::PricedLineItem;

use crate::evaluator::AppliedPromo;

/// Monetary breakdown of a checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    /// Sum of `price × quantity` over every line.
    pub subtotal: Decimal,
    /// Promo discount actually applied, never exceeding the subtotal.
    pub discount: Decimal,
    /// Shipping charged after any waiver.
    pub shipping: Decimal,
    /// Grand total the customer pays.
    pub total: Decimal,
}

/// Compute checkout totals for a priced cart and an optionally applied
/// promo.
#[must_use]
pub fn checkout_totals(
    items: &[PricedLineItem],
    applied: Option<&AppliedPromo>,
    shipping_rate: Decimal,
) -> CartTotals {
    let subtotal: Decimal = items.iter().map(PricedLineItem::line_total).sum();

    let discount = applied.map_or(Decimal::ZERO, |promo| promo.discount.min(subtotal));

    let shipping = match applied {
        Some(promo) if promo.promo.free_shipping => Decimal::ZERO,
        _ => shipping_rate,
    };

    // Comp codes zero the order rather than flowing through the discount
    // field.
    let total = if applied.is_some_and(|promo| promo.is_admin) {
        Decimal::ZERO
    } else {
        subtotal - discount + shipping
    };

    CartTotals {
        subtotal,
        discount,
        shipping,
        total,
    }
}

#[cfg(test)]
mod tests {
    use saltbox_core::{ProductSlug, PromoCode};

    use super::*;

    fn priced(slug: &str, quantity: u32, price: i64) -> PricedLineItem {
        PricedLineItem {
            slug: ProductSlug::from(slug),
            quantity,
            price: Decimal::from(price),
        }
    }

    fn applied(discount: i64, free_shipping: bool, is_admin: bool) -> AppliedPromo {
        AppliedPromo {
            discount: Decimal::from(discount),
            promo: PromoCode {
                code: "TEST".to_string(),
                is_active: true,
                percentage_off: Decimal::ZERO,
                is_bogo: false,
                bogo_buy_count: 0,
                bogo_get_count: 0,
                free_shipping,
                all_cart: true,
                eligible_product_slugs: Vec::new(),
                eligible_customer_ids: Vec::new(),
            },
            is_admin,
        }
    }

    #[test]
    fn test_totals_without_promo() {
        let totals = checkout_totals(
            &[priced("tea-towel", 2, 10), priced("stock-pot", 1, 100)],
            None,
            Decimal::from(7),
        );

        assert_eq!(totals.subtotal, Decimal::from(120));
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::from(7));
        assert_eq!(totals.total, Decimal::from(127));
    }

    #[test]
    fn test_totals_apply_discount() {
        let promo = applied(25, false, false);
        let totals = checkout_totals(
            &[priced("stock-pot", 2, 100), priced("tea-towel", 5, 10)],
            Some(&promo),
            Decimal::from(7),
        );

        assert_eq!(totals.total, Decimal::from(232));
    }

    #[test]
    fn test_discount_clamped_to_subtotal() {
        // A stale discount larger than the cart never drives the total
        // negative.
        let promo = applied(500, false, false);
        let totals = checkout_totals(&[priced("tea-towel", 1, 10)], Some(&promo), Decimal::ZERO);

        assert_eq!(totals.discount, Decimal::from(10));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_free_shipping_waives_shipping_only() {
        let promo = applied(0, true, false);
        let totals = checkout_totals(&[priced("stock-pot", 1, 100)], Some(&promo), Decimal::from(7));

        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(100));
    }

    #[test]
    fn test_comp_code_zeroes_the_total() {
        let promo = applied(0, true, true);
        let totals = checkout_totals(&[priced("stock-pot", 3, 100)], Some(&promo), Decimal::from(7));

        assert_eq!(totals.subtotal, Decimal::from(300));
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
