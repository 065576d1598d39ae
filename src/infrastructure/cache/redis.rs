//! Redis cache implementation

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::domain::cache::Cache;
use crate::domain::DomainError;

/// Configuration for Redis cache
#[derive(Debug, Clone)]
pub struct RedisCacheConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379")
    pub url: String,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: None,
        }
    }
}

impl RedisCacheConfig {
    /// Creates a new configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Redis cache implementation
///
/// Entries with an explicit TTL use SETEX; entries without one are stored
/// without expiry, matching the boundary's `set(key, value, ttl?)` shape.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
    config: RedisCacheConfig,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("url", &self.config.url)
            .field("key_prefix", &self.config.key_prefix)
            .finish()
    }
}

impl RedisCache {
    /// Connects to Redis with the given configuration
    pub async fn connect(config: RedisCacheConfig) -> Result<Self, DomainError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| DomainError::cache(format!("Invalid Redis URL: {}", e)))?;

        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| DomainError::cache(format!("Failed to connect to Redis: {}", e)))?;

        Ok(Self { connection, config })
    }

    fn prefixed_key(&self, key: &str) -> String {
        match &self.config.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn
            .get(self.prefixed_key(key))
            .await
            .map_err(|e| DomainError::cache(format!("Redis GET failed: {}", e)))?;

        Ok(value)
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        let key = self.prefixed_key(key);

        match ttl {
            Some(ttl) => {
                // SETEX treats 0 as invalid; round sub-second TTLs up
                let secs = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, secs)
                    .await
                    .map_err(|e| DomainError::cache(format!("Redis SETEX failed: {}", e)))?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(|e| DomainError::cache(format!("Redis SET failed: {}", e)))?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let mut conn = self.connection.clone();
        let removed: u64 = conn
            .del(self.prefixed_key(key))
            .await
            .map_err(|e| DomainError::cache(format!("Redis DEL failed: {}", e)))?;

        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        let mut conn = self.connection.clone();
        let exists: bool = conn
            .exists(self.prefixed_key(key))
            .await
            .map_err(|e| DomainError::cache(format!("Redis EXISTS failed: {}", e)))?;

        Ok(exists)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match &self.config.key_prefix {
            Some(prefix) => {
                // Scoped clear: only remove keys under our prefix
                let pattern = format!("{}:*", prefix);
                let keys: Vec<String> = {
                    let mut conn = self.connection.clone();
                    let mut iter = conn
                        .scan_match::<_, String>(&pattern)
                        .await
                        .map_err(|e| DomainError::cache(format!("Redis SCAN failed: {}", e)))?;

                    let mut keys = Vec::new();
                    while let Some(key) = iter.next_item().await {
                        keys.push(key);
                    }
                    keys
                };

                if !keys.is_empty() {
                    let mut conn = self.connection.clone();
                    conn.del::<_, ()>(keys)
                        .await
                        .map_err(|e| DomainError::cache(format!("Redis DEL failed: {}", e)))?;
                }
            }
            None => {
                let mut conn = self.connection.clone();
                redis::cmd("FLUSHDB")
                    .query_async::<()>(&mut conn)
                    .await
                    .map_err(|e| DomainError::cache(format!("Redis FLUSHDB failed: {}", e)))?;
            }
        }

        Ok(())
    }
}
