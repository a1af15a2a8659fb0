//! Null cache backend for testing
//!
//! A backend that doesn't store anything. Useful for testing and for
//! deployments that keep the middleware wired but caching switched off.

use actcache_domain::error::Result;
use actcache_domain::ports::CacheBackend;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Null cache backend that doesn't store anything
///
/// Every `get` misses and every write is accepted and discarded.
///
/// # Example
///
/// ```rust
/// use actcache_providers::cache::NullCacheBackend;
///
/// let backend = NullCacheBackend::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheBackend;

impl NullCacheBackend {
    /// Create a new null cache backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheBackend for NullCacheBackend {
    async fn get(&self, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    async fn del(&self, _keys: &[String]) -> Result<()> {
        Ok(())
    }

    async fn clean(&self, _pattern: &str) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
