//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with a Redis-backed implementation,
//! [`RedisCache`]. Entries expire after a fixed TTL; there is no other
//! eviction policy.

mod redis_cache;
mod service;

pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
