//! Caching decorator for product price lookups.
//!
//! Wraps any [`ProductPriceLookup`] in a `moka` future cache so repeated
//! slugs inside the TTL window cost a single backend round trip. Only
//! positive results are cached: a product that failed to resolve is retried
//! on the next request.

use std::collections::HashMap;

use async_trait::async_trait;
use moka::future::Cache;

use saltbox_core::{ProductRecord, ProductSlug};

use crate::config::CatalogCacheConfig;
use crate::store::{LookupError, ProductPriceLookup};

/// A [`ProductPriceLookup`] with an in-memory read-through cache.
pub struct CachedPriceLookup<P> {
    inner: P,
    cache: Cache<ProductSlug, ProductRecord>,
}

impl<P> CachedPriceLookup<P> {
    /// Wrap `inner` with a cache sized and aged per `config`.
    #[must_use]
    pub fn new(inner: P, config: &CatalogCacheConfig) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_live(config.ttl)
                .build(),
        }
    }
}

#[async_trait]
impl<P> ProductPriceLookup for CachedPriceLookup<P>
where
    P: ProductPriceLookup,
{
    async fn get_by_slug(
        &self,
        slug: &ProductSlug,
    ) -> Result<Option<ProductRecord>, LookupError> {
        if let Some(record) = self.cache.get(slug).await {
            return Ok(Some(record));
        }

        let record = self.inner.get_by_slug(slug).await?;
        if let Some(ref found) = record {
            self.cache.insert(slug.clone(), found.clone()).await;
        }
        Ok(record)
    }

    async fn get_by_slugs(
        &self,
        slugs: &[ProductSlug],
    ) -> Result<HashMap<ProductSlug, ProductRecord>, LookupError> {
        let mut found = HashMap::with_capacity(slugs.len());
        let mut misses = Vec::new();

        for slug in slugs {
            match self.cache.get(slug).await {
                Some(record) => {
                    found.insert(slug.clone(), record);
                }
                None => misses.push(slug.clone()),
            }
        }

        if !misses.is_empty() {
            let fetched = self.inner.get_by_slugs(&misses).await?;
            for (slug, record) in fetched {
                self.cache.insert(slug.clone(), record.clone()).await;
                found.insert(slug, record);
            }
        }

        Ok(found)
    }
}
