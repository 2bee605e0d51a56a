//! Saltbox promo code evaluation engine.
//!
//! Given a promo code, a cart, and an optional customer identity, the engine
//! decides whether the code applies and computes the total monetary
//! discount. Every call is a pure function of its three inputs plus two
//! collaborator lookups: a [`store::PromoCodeStore`] for promo records and a
//! [`store::ProductPriceLookup`] for authoritative prices.
//!
//! Business-rule failures (unknown code, ineligible customer, not enough
//! units for a BOGO rule, ...) come back as data the caller can render
//! directly; only infrastructure failures in the two lookups surface as
//! errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use saltbox_promo::{Evaluation, PromoEvaluator};
//!
//! let evaluator = PromoEvaluator::new(promos, catalog);
//! match evaluator.evaluate("SUMMER10", &cart, Some(customer)).await? {
//!     Evaluation::Applied(applied) => println!("discount: {}", applied.discount),
//!     Evaluation::Rejected(rejection) => println!("{rejection}"),
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod config;
pub mod evaluator;
pub mod memory;
pub mod rejection;
pub mod response;
pub mod store;
pub mod totals;

pub use cache::CachedPriceLookup;
pub use config::{CatalogCacheConfig, ConfigError};
pub use evaluator::{AppliedPromo, Evaluation, PromoEvaluator};
pub use memory::{InMemoryCatalog, InMemoryPromoStore};
pub use rejection::Rejection;
pub use response::EvaluationResult;
pub use store::{LookupError, ProductPriceLookup, PromoCodeStore};
pub use totals::{CartTotals, checkout_totals};
