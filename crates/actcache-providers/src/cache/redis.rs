//! Redis distributed cache backend
//!
//! Distributed backend using Redis. Suitable for brokers running on several
//! nodes that should share cached action results.
//!
//! ## Features
//!
//! - Values stored as JSON strings
//! - `SET EX` when a TTL is known, plain `SET` otherwise
//! - `clean` walks `SCAN MATCH` and deletes every match
//! - One multiplexed connection, opened lazily and dropped on `close`
//!
//! ## Example
//!
//! ```ignore
//! use actcache_providers::cache::RedisCacheBackend;
//!
//! let backend = RedisCacheBackend::new("redis://localhost:6379")?;
//! ```

use crate::constants::REDIS_SCAN_BATCH_SIZE;
use actcache_domain::error::{Error, Result};
use actcache_domain::ports::CacheBackend;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Redis cache backend
#[derive(Clone)]
pub struct RedisCacheBackend {
    client: Client,
    default_ttl: Option<Duration>,
    connection: std::sync::Arc<Mutex<Option<MultiplexedConnection>>>,
}

impl RedisCacheBackend {
    /// Create a new Redis backend from a connection URL
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        Self::with_default_ttl(connection_string, None)
    }

    /// Create a new Redis backend with a fallback TTL for `set` calls without one
    pub fn with_default_ttl(connection_string: &str, default_ttl: Option<Duration>) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::cache_with_source("Failed to create Redis client", e))?;

        Ok(Self {
            client,
            default_ttl,
            connection: std::sync::Arc::new(Mutex::new(None)),
        })
    }

    /// Get the shared connection, opening it on first use
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        let mut guard = self.connection.lock().await;
        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source("Failed to get Redis connection", e))?;
        *guard = Some(conn.clone());
        Ok(conn)
    }

    /// Collect every key matching `pattern` with SCAN
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.get_connection().await?;
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let page: redis::RedisResult<(u64, Vec<String>)> = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await;
            let (next, batch) =
                page.map_err(|e| Error::cache_with_source("Redis SCAN failed", e))?;

            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(keys)
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut conn = self.get_connection().await?;

        let raw: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| Error::cache_with_source("Redis GET failed", e))?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let json = serde_json::to_string(&value)?;

        let result: redis::RedisResult<()> = match ttl.or(self.default_ttl) {
            Some(ttl) => conn.set_ex(key, json, ttl.as_secs().max(1)).await,
            None => conn.set(key, json).await,
        };

        result.map_err(|e| Error::cache_with_source("Redis SET failed", e))
    }

    async fn del(&self, keys: &[String]) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.get_connection().await?;

        let deleted: redis::RedisResult<i64> = redis::cmd("DEL")
            .arg(keys.to_vec())
            .query_async(&mut conn)
            .await;
        deleted
            .map(|count| debug!(requested = keys.len(), deleted = count, "Redis keys deleted"))
            .map_err(|e| Error::cache_with_source("Redis DEL failed", e))
    }

    async fn clean(&self, pattern: &str) -> Result<()> {
        let pattern = pattern.replace("**", "*");
        let keys = self.scan_keys(&pattern).await?;
        debug!(pattern = %pattern, matched = keys.len(), "Redis clean");
        self.del(&keys).await
    }

    async fn close(&self) -> Result<()> {
        self.connection.lock().await.take();
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheBackend")
            .field(
                "connected",
                &self
                    .connection
                    .try_lock()
                    .map_or(true, |conn| conn.is_some()),
            )
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
