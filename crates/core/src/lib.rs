//! Saltbox Core - Shared domain types library.
//!
//! This crate provides the domain types used across all Saltbox components:
//! - `promo` - Promo code evaluation engine
//! - `integration-tests` - Cross-crate test flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer IDs, product slugs, cart lines, and promo records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
