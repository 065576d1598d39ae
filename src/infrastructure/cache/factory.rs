//! Cache factory - selects a cache backend from configuration

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::CacheConfig;
use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
}

impl std::fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackend::Memory => write!(f, "memory"),
            CacheBackend::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for CacheBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(CacheBackend::Memory),
            "redis" => Ok(CacheBackend::Redis),
            _ => Err(DomainError::cache(format!(
                "Unknown cache backend: {}. Valid backends: memory, redis",
                s
            ))),
        }
    }
}

/// Factory for cache instances
pub struct CacheFactory;

impl CacheFactory {
    /// Create a cache from application configuration
    ///
    /// Unknown backend names fall back to the in-memory cache.
    pub async fn create(config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        let backend = config.backend.parse().unwrap_or(CacheBackend::Memory);

        match backend {
            CacheBackend::Memory => {
                info!("Using in-memory cache");
                let cache_config = InMemoryCacheConfig::default()
                    .with_max_capacity(config.max_capacity)
                    .with_default_ttl(Duration::from_secs(config.default_ttl_secs));
                Ok(Arc::new(InMemoryCache::with_config(cache_config)))
            }
            CacheBackend::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::cache("Redis backend selected but no redis_url configured")
                })?;

                info!("Using Redis cache at {}", url);
                let mut cache_config = RedisCacheConfig::new(url);
                if let Some(prefix) = &config.key_prefix {
                    cache_config = cache_config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(RedisCache::connect(cache_config).await?))
            }
        }
    }
}
