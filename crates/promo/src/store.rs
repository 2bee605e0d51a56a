//! Collaborator ports for promo and catalog lookups.
//!
//! The engine never owns storage. Promo records and product prices come
//! through these two ports; the backing implementation (database, remote
//! API, in-memory fixture) is the embedding application's choice. See
//! [`crate::memory`] for the reference implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use saltbox_core::{ProductRecord, ProductSlug, PromoCode};

/// Infrastructure failure in a backing store.
///
/// These are the only errors the engine propagates with `?`. Business-rule
/// rejections are returned as data instead; see [`crate::Rejection`]. The
/// engine performs no retries - callers map these to their own generic
/// "try again" message.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing store could not be reached or failed mid-query.
    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),

    /// The store returned a record the engine cannot interpret.
    #[error("corrupt record in backing store: {0}")]
    DataCorruption(String),
}

/// Read access to promo code records.
#[async_trait]
pub trait PromoCodeStore: Send + Sync {
    /// Fetch the full promo record for a code, or `None` when no such code
    /// exists. The match is case-sensitive.
    async fn get_by_code(&self, code: &str) -> Result<Option<PromoCode>, LookupError>;
}

/// Read access to authoritative product prices.
#[async_trait]
pub trait ProductPriceLookup: Send + Sync {
    /// Fetch the catalog record for one slug, or `None` when the product no
    /// longer exists or is unavailable.
    async fn get_by_slug(
        &self,
        slug: &ProductSlug,
    ) -> Result<Option<ProductRecord>, LookupError>;

    /// Fetch catalog records for several slugs in one round trip.
    ///
    /// Slugs that fail to resolve are simply absent from the result map.
    /// The default implementation loops over `get_by_slug`; backends with a
    /// native multi-fetch should override it.
    async fn get_by_slugs(
        &self,
        slugs: &[ProductSlug],
    ) -> Result<HashMap<ProductSlug, ProductRecord>, LookupError> {
        let mut found = HashMap::with_capacity(slugs.len());
        for slug in slugs {
            if let Some(record) = self.get_by_slug(slug).await? {
                found.insert(slug.clone(), record);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "lookup backend unavailable: connection refused");

        let err = LookupError::DataCorruption("negative price".to_string());
        assert_eq!(err.to_string(), "corrupt record in backing store: negative price");
    }
}
