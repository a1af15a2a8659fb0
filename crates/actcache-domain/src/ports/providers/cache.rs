//! Cache Backend Port
//!
//! Capability surface every physical cache store implements. Supports
//! in-memory (Moka), distributed (Redis), and null backends.
//!
//! The cache core never persists anything itself: it derives keys and
//! decides when to read and write, the backend owns storage, expiry and
//! its own synchronization.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Cache Backend Port
///
/// # Implementations
///
/// - **Memory**: Moka in-memory cache with per-entry TTL
/// - **Redis**: Distributed cache for multi-node deployments
/// - **Null**: Always misses, for tests and disabled caching
///
/// # Example
///
/// ```ignore
/// use actcache_domain::ports::CacheBackend;
/// use std::time::Duration;
///
/// backend.set("posts.find:id|1", json!({"id": 1}), Some(Duration::from_secs(30))).await?;
/// if let Some(value) = backend.get("posts.find:id|1").await? {
///     println!("cached: {value}");
/// }
/// ```
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Get the value stored under `key`
    ///
    /// A plain miss is `Ok(None)`, never an error.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`
    ///
    /// `ttl == None` means the backend default, or no expiry.
    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()>;

    /// Delete one or more keys
    async fn del(&self, keys: &[String]) -> Result<()>;

    /// Delete every key matching `pattern` (pattern syntax is backend-defined)
    async fn clean(&self, pattern: &str) -> Result<()>;

    /// Release backend resources on shutdown
    async fn close(&self) -> Result<()>;

    /// Get the name/identifier of this backend implementation
    fn provider_name(&self) -> &str;
}
