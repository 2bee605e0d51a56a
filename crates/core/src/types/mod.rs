//! Core types for Saltbox.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod customer;
pub mod product;
pub mod promo;

pub use cart::{CartLineItem, PricedLineItem};
pub use customer::CustomerId;
pub use product::{ProductRecord, ProductSlug};
pub use promo::{PromoCode, PromoStrategy};
