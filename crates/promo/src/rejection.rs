//! Business-rule rejection taxonomy.
//!
//! Every way an evaluation can fail short of an infrastructure error. A
//! rejection is data, not an error: the `Display` text is the message shown
//! to the customer at checkout, and the evaluation call itself still
//! returns `Ok`.

use thiserror::Error;

/// Reason a promo code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Code not found, inactive, or restricted with nothing to restrict to.
    #[error("Invalid promo code")]
    InvalidCode,

    /// Customer-restricted code and the caller is not on the allow-list.
    #[error("This promo code is not available for your account")]
    CustomerNotEligible,

    /// Product-restricted code with no matching cart items.
    #[error("No eligible products found")]
    NoEligibleProducts,

    /// BOGO code without enough units to cover buy + get.
    #[error("Not enough products in cart")]
    InsufficientCartQuantity,

    /// The record matches none of the known discount strategies. Rendered
    /// with the generic message; the distinction only matters for logging
    /// and data-integrity follow-up.
    #[error("Invalid promo code")]
    UnrecognizedShape,
}
