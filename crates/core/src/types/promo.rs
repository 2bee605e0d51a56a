//! Promotional discount code records and strategy resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::customer::CustomerId;
use crate::types::product::ProductSlug;

/// A promotional discount code as stored by the admin back-office.
///
/// Records are created, edited, and deleted by administrative tooling; the
/// evaluation engine only ever reads them. The boolean flags encode which
/// discount strategy the code carries - resolve them through [`strategy`]
/// rather than inspecting fields directly.
///
/// [`strategy`]: PromoCode::strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    /// Case-sensitive unique code customers type at checkout.
    pub code: String,
    /// Inactive codes are always rejected.
    pub is_active: bool,
    /// Percentage discount in `[0, 100]`; zero means no percentage component.
    #[serde(default)]
    pub percentage_off: Decimal,
    /// Buy-N-get-M-free rule toggle.
    #[serde(default)]
    pub is_bogo: bool,
    /// Units that must be bought for a BOGO rule.
    #[serde(default)]
    pub bogo_buy_count: u32,
    /// Units given away free by a BOGO rule.
    #[serde(default)]
    pub bogo_get_count: u32,
    /// Waives the shipping cost at checkout. The waiver is applied by the
    /// caller and is not part of the computed discount amount.
    #[serde(default)]
    pub free_shipping: bool,
    /// True: every cart line participates. False: restricted to
    /// `eligible_product_slugs`.
    #[serde(default)]
    pub all_cart: bool,
    /// Allow-list of product slugs, meaningful only when `all_cart` is false.
    #[serde(default)]
    pub eligible_product_slugs: Vec<ProductSlug>,
    /// When non-empty, only the listed customers may redeem the code.
    #[serde(default)]
    pub eligible_customer_ids: Vec<CustomerId>,
}

impl PromoCode {
    /// Resolve the discount strategy encoded by this record's flags.
    ///
    /// Strategies are mutually exclusive and resolved in a fixed priority
    /// order: percentage-off, then BOGO, then free shipping. Returns `None`
    /// when no flag combination matches, which callers treat as a malformed
    /// record.
    #[must_use]
    pub fn strategy(&self) -> Option<PromoStrategy> {
        if self.percentage_off > Decimal::ZERO {
            Some(PromoStrategy::PercentageOff(self.percentage_off))
        } else if self.is_bogo {
            Some(PromoStrategy::Bogo {
                buy: self.bogo_buy_count,
                get: self.bogo_get_count,
            })
        } else if self.free_shipping {
            Some(PromoStrategy::FreeShipping)
        } else {
            None
        }
    }

    /// True when this record is the staff comp-code shape: free shipping
    /// plus a 100% discount across the whole cart.
    #[must_use]
    pub fn is_admin_comp(&self) -> bool {
        self.free_shipping && self.all_cart && self.percentage_off == Decimal::ONE_HUNDRED
    }

    /// True when the code is open to the given caller.
    ///
    /// A record with an empty allow-list is open to everyone, including
    /// anonymous checkouts.
    #[must_use]
    pub fn customer_may_redeem(&self, customer: Option<CustomerId>) -> bool {
        if self.eligible_customer_ids.is_empty() {
            return true;
        }
        customer.is_some_and(|id| self.eligible_customer_ids.contains(&id))
    }
}

/// Discount strategy resolved from a [`PromoCode`]'s flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoStrategy {
    /// Percentage off every participating line.
    PercentageOff(Decimal),
    /// Buy `buy` units, get the `get` cheapest units free.
    Bogo {
        /// Units that must be purchased.
        buy: u32,
        /// Units given away free.
        get: u32,
    },
    /// Shipping waiver only; no monetary discount.
    FreeShipping,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(code: &str) -> PromoCode {
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

    #[test]
    fn test_strategy_percentage_beats_bogo() {
        let mut record = promo("STACKED");
        record.percentage_off = Decimal::from(10);
        record.is_bogo = true;
        record.bogo_buy_count = 1;
        record.bogo_get_count = 1;

        assert_eq!(
            record.strategy(),
            Some(PromoStrategy::PercentageOff(Decimal::from(10)))
        );
    }

    #[test]
    fn test_strategy_bogo_beats_free_shipping() {
        let mut record = promo("B2G1");
        record.is_bogo = true;
        record.bogo_buy_count = 2;
        record.bogo_get_count = 1;
        record.free_shipping = true;

        assert_eq!(record.strategy(), Some(PromoStrategy::Bogo { buy: 2, get: 1 }));
    }

    #[test]
    fn test_strategy_free_shipping_last() {
        let mut record = promo("SHIPFREE");
        record.free_shipping = true;

        assert_eq!(record.strategy(), Some(PromoStrategy::FreeShipping));
    }

    #[test]
    fn test_strategy_none_for_bare_record() {
        assert_eq!(promo("EMPTY").strategy(), None);
    }

    #[test]
    fn test_admin_comp_requires_all_three_flags() {
        let mut record = promo("COMP");
        record.free_shipping = true;
        record.all_cart = true;
        record.percentage_off = Decimal::ONE_HUNDRED;
        assert!(record.is_admin_comp());

        record.all_cart = false;
        assert!(!record.is_admin_comp());

        record.all_cart = true;
        record.percentage_off = Decimal::from(99);
        assert!(!record.is_admin_comp());
    }

    #[test]
    fn test_customer_may_redeem_open_code() {
        let record = promo("OPEN");
        assert!(record.customer_may_redeem(None));
        assert!(record.customer_may_redeem(Some(CustomerId::new(9))));
    }

    #[test]
    fn test_customer_may_redeem_restricted_code() {
        let mut record = promo("VIP");
        record.eligible_customer_ids = vec![CustomerId::new(5), CustomerId::new(6)];

        assert!(record.customer_may_redeem(Some(CustomerId::new(5))));
        assert!(!record.customer_may_redeem(Some(CustomerId::new(7))));
        assert!(!record.customer_may_redeem(None));
    }

    #[test]
    fn test_promo_record_serde_defaults() {
        let record: PromoCode =
            serde_json::from_str(r#"{"code": "BARE", "is_active": true}"#).expect("deserialize");

        assert_eq!(record.percentage_off, Decimal::ZERO);
        assert!(!record.is_bogo);
        assert!(record.eligible_product_slugs.is_empty());
        assert!(record.eligible_customer_ids.is_empty());
    }
}
