//! In-memory reference implementations of the collaborator ports.
//!
//! These back the engine in tests and local development. Production
//! deployments substitute implementations over the real promo and catalog
//! stores.

use std::collections::HashMap;

use async_trait::async_trait;

use saltbox_core::{ProductRecord, ProductSlug, PromoCode};

use crate::store::{LookupError, ProductPriceLookup, PromoCodeStore};

/// Promo store backed by a map of code to record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromoStore {
    promos: HashMap<String, PromoCode>,
}

impl InMemoryPromoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a promo record, replacing any existing record with the same code.
    pub fn insert(&mut self, promo: PromoCode) {
        self.promos.insert(promo.code.clone(), promo);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, promo: PromoCode) -> Self {
        self.insert(promo);
        self
    }
}

#[async_trait]
impl PromoCodeStore for InMemoryPromoStore {
    async fn get_by_code(&self, code: &str) -> Result<Option<PromoCode>, LookupError> {
        Ok(self.promos.get(code).cloned())
    }
}

/// Catalog backed by a map of slug to record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductSlug, ProductRecord>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, replacing any existing record with the same slug.
    pub fn insert(&mut self, record: ProductRecord) {
        self.products.insert(record.slug.clone(), record);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, record: ProductRecord) -> Self {
        self.insert(record);
        self
    }
}

#[async_trait]
impl ProductPriceLookup for InMemoryCatalog {
    async fn get_by_slug(
        &self,
        slug: &ProductSlug,
    ) -> Result<Option<ProductRecord>, LookupError> {
        Ok(self.products.get(slug).cloned())
    }

    async fn get_by_slugs(
        &self,
        slugs: &[ProductSlug],
    ) -> Result<HashMap<ProductSlug, ProductRecord>, LookupError> {
        Ok(slugs
            .iter()
            .filter_map(|slug| {
                self.products
                    .get(slug)
                    .map(|record| (slug.clone(), record.clone()))
            })
            .collect())
    }
}
