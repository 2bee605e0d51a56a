//! Cache configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PROMO_CACHE_TTL_SECS` - Catalog cache time-to-live in seconds (default: 300)
//! - `PROMO_CACHE_CAPACITY` - Maximum number of cached catalog records (default: 1024)

use std::time::Duration;

use thiserror::Error;

/// Default time-to-live for cached catalog records.
const DEFAULT_TTL_SECS: u64 = 300;

/// Default cache capacity in records.
const DEFAULT_CAPACITY: u64 = 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog cache configuration.
#[derive(Debug, Clone)]
pub struct CatalogCacheConfig {
    /// How long a cached record stays fresh.
    pub ttl: Duration,
    /// Maximum number of records held.
    pub capacity: u64,
}

impl Default for CatalogCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CatalogCacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let ttl_secs = parse_env_or("PROMO_CACHE_TTL_SECS", DEFAULT_TTL_SECS)?;
        let capacity = parse_env_or("PROMO_CACHE_CAPACITY", DEFAULT_CAPACITY)?;

        Ok(Self {
            ttl: Duration::from_secs(ttl_secs),
            capacity,
        })
    }
}

/// Parse an environment variable as `u64`, falling back when unset.
fn parse_env_or(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
