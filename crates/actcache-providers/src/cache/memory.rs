//! Moka in-memory cache backend
//!
//! High-performance, concurrent in-memory backend using Moka.
//!
//! ## Features
//!
//! - Per-entry TTL taken from each `set` call, with a backend-wide fallback
//! - Bounded capacity with automatic eviction
//! - Glob-pattern `clean`
//! - Optional broker event listener for cluster-wide invalidation
//!
//! ## Example
//!
//! ```ignore
//! use actcache_providers::cache::MemoryCacheBackend;
//! use std::time::Duration;
//!
//! let backend = MemoryCacheBackend::with_config(1000, Some(Duration::from_secs(300)));
//! ```

use super::pattern;
use crate::constants::MEMORY_CACHE_DEFAULT_MAX_ENTRIES;
use actcache_domain::error::Result;
use actcache_domain::events::BrokerEvent;
use actcache_domain::ports::{BrokerEventStream, CacheBackend};
use async_trait::async_trait;
use futures::StreamExt;
use moka::Expiry;
use moka::future::Cache;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    ttl: Option<Duration>,
}

/// Expires each entry after its own TTL; entries without one never expire
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based in-memory cache backend
#[derive(Clone)]
pub struct MemoryCacheBackend {
    cache: Cache<String, CacheEntry>,
    max_entries: u64,
    default_ttl: Option<Duration>,
}

impl Default for MemoryCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCacheBackend {
    /// Create a memory backend with default settings
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CACHE_DEFAULT_MAX_ENTRIES)
    }

    /// Create a memory backend holding at most `max_entries` entries
    pub fn with_capacity(max_entries: u64) -> Self {
        Self::with_config(max_entries, None)
    }

    /// Create a memory backend with capacity and fallback TTL
    ///
    /// `default_ttl` applies to `set` calls that carry no TTL of their own.
    pub fn with_config(max_entries: u64, default_ttl: Option<Duration>) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            max_entries,
            default_ttl,
        }
    }

    /// Get the maximum capacity of the cache
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Number of live entries, after applying pending evictions
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Apply broker invalidation events until the stream ends
    ///
    /// `CacheClean` and `CacheDel` are forwarded to [`CacheBackend::clean`]
    /// and [`CacheBackend::del`]. `TransporterConnected` drops everything,
    /// since entries may have gone stale while the node was disconnected.
    pub fn spawn_event_listener(self: &Arc<Self>, mut events: BrokerEventStream) -> JoinHandle<()> {
        let backend = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let result = match &event {
                    BrokerEvent::CacheClean { pattern } => {
                        backend.clean(pattern.as_deref().unwrap_or("*")).await
                    }
                    BrokerEvent::CacheDel { keys } => backend.del(keys).await,
                    BrokerEvent::TransporterConnected => {
                        backend.invalidate_all().await;
                        Ok(())
                    }
                };
                if let Err(e) = result {
                    warn!(event = ?event, error = %e, "Failed to apply broker cache event");
                }
            }
            debug!("Broker event stream closed, memory cache listener stopped");
        })
    }

    async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()> {
        let entry = CacheEntry {
            value,
            ttl: ttl.or(self.default_ttl),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> Result<()> {
        for key in keys {
            self.cache.invalidate(key).await;
        }
        Ok(())
    }

    async fn clean(&self, pattern: &str) -> Result<()> {
        let matcher = pattern::compile(pattern)?;
        let matched: Vec<Arc<String>> = self
            .cache
            .iter()
            .filter(|(key, _)| matcher.is_match(key.as_str()))
            .map(|(key, _)| key)
            .collect();

        for key in &matched {
            self.cache.invalidate(key.as_str()).await;
        }
        debug!(pattern = pattern, removed = matched.len(), "Memory cache cleaned");
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.invalidate_all().await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for MemoryCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheBackend")
            .field("max_entries", &self.max_entries)
            .field("default_ttl", &self.default_ttl)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
