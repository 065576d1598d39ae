//! Cache implementations
//!
//! In-memory (moka) and Redis backends behind the domain `Cache` trait,
//! plus a factory that picks one from configuration.

mod factory;
mod in_memory;
mod redis;

pub use factory::{CacheBackend, CacheFactory};
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use redis::{RedisCache, RedisCacheConfig};
