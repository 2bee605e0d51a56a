//! Promo code evaluation.
//!
//! A single-pass, stateless computation: fetch and gate the promo record,
//! price the cart from the catalog, then compute the discount under exactly
//! one strategy. Business-rule failures come back as
//! [`Evaluation::Rejected`]; only infrastructure failures from the two
//! collaborator ports surface as `Err`.

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use saltbox_core::{CartLineItem, CustomerId, PricedLineItem, ProductSlug, PromoCode, PromoStrategy};

use crate::rejection::Rejection;
use crate::store::{LookupError, ProductPriceLookup, PromoCodeStore};

/// Outcome of evaluating a promo code against a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The code applies; carries the computed discount.
    Applied(AppliedPromo),
    /// The code was rejected for a business-rule reason.
    Rejected(Rejection),
}

impl Evaluation {
    /// True when the promo applied.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied promo, if the code was accepted.
    #[must_use]
    pub const fn applied(&self) -> Option<&AppliedPromo> {
        match self {
            Self::Applied(applied) => Some(applied),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if the code was refused.
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// A successfully applied promo code.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromo {
    /// Total monetary discount across the participating items. Never
    /// exceeds the sum of `price × quantity` over those items.
    pub discount: Decimal,
    /// The promo record the discount was computed from.
    pub promo: PromoCode,
    /// Marks a staff comp code. The caller zeroes the order total outright
    /// instead of applying `discount`.
    pub is_admin: bool,
}

/// Evaluates promo codes against carts.
///
/// Holds the two collaborator ports; every call to
/// [`evaluate`](Self::evaluate) is an independent, side-effect-free
/// computation, so one evaluator can serve concurrent requests.
pub struct PromoEvaluator<S, C> {
    promos: S,
    catalog: C,
}

impl<S, C> PromoEvaluator<S, C>
where
    S: PromoCodeStore,
    C: ProductPriceLookup,
{
    /// Create an evaluator over a promo store and a product catalog.
    pub const fn new(promos: S, catalog: C) -> Self {
        Self { promos, catalog }
    }

    /// Evaluate `code` against the given cart lines.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] only when one of the backing stores fails;
    /// every business-rule outcome is an `Ok(Evaluation)`.
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub async fn evaluate(
        &self,
        code: &str,
        cart: &[CartLineItem],
        customer: Option<CustomerId>,
    ) -> Result<Evaluation, LookupError> {
        // Fetch and gate the promo record before any pricing work.
        let Some(promo) = self.promos.get_by_code(code).await? else {
            debug!(code, "promo code not found");
            return Ok(Evaluation::Rejected(Rejection::InvalidCode));
        };
        if !promo.is_active {
            debug!(code, "promo code is inactive");
            return Ok(Evaluation::Rejected(Rejection::InvalidCode));
        }
        if !promo.customer_may_redeem(customer) {
            return Ok(Evaluation::Rejected(Rejection::CustomerNotEligible));
        }

        let priced = self.price_cart(cart).await?;

        // Staff comp codes short-circuit before any scope or strategy work,
        // even on an empty cart. The order total is zeroed by the caller,
        // not through the discount amount.
        if promo.is_admin_comp() {
            debug!(code, "comp code accepted");
            return Ok(Evaluation::Applied(AppliedPromo {
                discount: Decimal::ZERO,
                promo,
                is_admin: true,
            }));
        }

        let participating: Vec<PricedLineItem> = if promo.all_cart {
            priced
        } else if promo.eligible_product_slugs.is_empty() {
            // Restricted code with nothing to restrict to.
            return Ok(Evaluation::Rejected(Rejection::InvalidCode));
        } else {
            let eligible: Vec<PricedLineItem> = priced
                .into_iter()
                .filter(|item| promo.eligible_product_slugs.contains(&item.slug))
                .collect();
            if eligible.is_empty() {
                return Ok(Evaluation::Rejected(Rejection::NoEligibleProducts));
            }
            eligible
        };

        let discount = match promo.strategy() {
            Some(PromoStrategy::PercentageOff(percent)) => {
                percentage_discount(&participating, percent)
            }
            Some(PromoStrategy::Bogo { buy, get }) => {
                let total_units: u64 = participating
                    .iter()
                    .map(|item| u64::from(item.quantity))
                    .sum();
                if total_units < u64::from(buy) + u64::from(get) {
                    return Ok(Evaluation::Rejected(Rejection::InsufficientCartQuantity));
                }
                cheapest_units_value(participating, get)
            }
            // The shipping waiver is the caller's concern; no monetary
            // discount is recorded for it here.
            Some(PromoStrategy::FreeShipping) => Decimal::ZERO,
            None => return Ok(Evaluation::Rejected(Rejection::UnrecognizedShape)),
        };

        // The comp-code flag on this path does not require `all_cart`,
        // unlike the short-circuit above.
        // TODO: confirm with product whether both checks should match.
        let is_admin = promo.free_shipping && promo.percentage_off == Decimal::ONE_HUNDRED;

        debug!(code, %discount, is_admin, "promo code applied");
        Ok(Evaluation::Applied(AppliedPromo {
            discount,
            promo,
            is_admin,
        }))
    }

    /// Price every cart line from the catalog in one batched fetch.
    ///
    /// Lines whose slug no longer resolves are dropped rather than failing
    /// the evaluation; dropped lines also cannot satisfy BOGO unit counts.
    /// Surviving lines keep their cart order.
    async fn price_cart(
        &self,
        cart: &[CartLineItem],
    ) -> Result<Vec<PricedLineItem>, LookupError> {
        let slugs: Vec<ProductSlug> = cart.iter().map(|line| line.slug.clone()).collect();
        let records = self.catalog.get_by_slugs(&slugs).await?;

        let mut priced = Vec::with_capacity(cart.len());
        for line in cart {
            match records.get(&line.slug) {
                Some(record) => priced.push(PricedLineItem {
                    slug: line.slug.clone(),
                    quantity: line.quantity,
                    price: record.price,
                }),
                None => warn!(slug = %line.slug, "cart slug did not resolve, dropping line"),
            }
        }
        Ok(priced)
    }
}

/// Sum of `price × quantity × percent / 100` over the items.
fn percentage_discount(items: &[PricedLineItem], percent: Decimal) -> Decimal {
    items
        .iter()
        .map(|item| item.line_total() * percent / Decimal::ONE_HUNDRED)
        .sum()
}

/// Value of the `free_units` cheapest units across the items.
///
/// Items are walked in ascending unit-price order (stable sort, so lines
/// with equal prices keep their cart order) and the free-unit budget is
/// spent cheapest-first, splitting a line when the budget runs out inside
/// it.
fn cheapest_units_value(mut items: Vec<PricedLineItem>, free_units: u32) -> Decimal {
    items.sort_by(|a, b| a.price.cmp(&b.price));

    let mut budget = free_units;
    let mut discount = Decimal::ZERO;
    for item in &items {
        if item.quantity <= budget {
            discount += item.line_total();
            budget -= item.quantity;
        } else {
            discount += item.price * Decimal::from(budget);
            break;
        }
    }
    discount
}
