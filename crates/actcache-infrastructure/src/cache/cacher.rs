//! Cacher lifecycle and configuration
//!
//! The [`Cacher`] owns the cache configuration, the key deriver and the
//! concrete backend. It is itself a [`CacheBackend`]: every key and clean
//! pattern passing through it gains the active prefix, and writes without a
//! TTL get the configured default before reaching the backend.
//!
//! The active prefix is computed by [`Cacher::init`]:
//!
//! | Configured prefix | Broker namespace | Active prefix |
//! |-------------------|------------------|---------------|
//! | `"app"` | any | `app-` |
//! | none | `"staging"` | `MOL-staging-` |
//! | none | none or empty | `MOL-` |

use super::middleware::CacheMiddleware;
use crate::config::CacherConfig;
use crate::constants::CACHER_LOG_TARGET;
use actcache_domain::cache_key::{KeyDeriver, KeyGenerator};
use actcache_domain::constants::{DEFAULT_KEY_PREFIX, KEY_PREFIX_SEPARATOR};
use actcache_domain::error::Result;
use actcache_domain::ports::{Broker, CacheBackend};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::info;

/// Cache configuration bound to a backend and, after `init`, to a broker
pub struct Cacher {
    config: CacherConfig,
    deriver: KeyDeriver,
    backend: Arc<dyn CacheBackend>,
    prefix: RwLock<String>,
    node_id: RwLock<Option<String>>,
}

impl Cacher {
    /// Create a cacher over `backend`
    ///
    /// Until [`Cacher::init`] runs, the prefix ignores any broker namespace.
    pub fn new(config: CacherConfig, backend: Arc<dyn CacheBackend>) -> Self {
        let deriver = KeyDeriver::new().with_max_params_length(config.max_params_length);
        let prefix = active_prefix(config.prefix.as_deref(), None);

        Self {
            config,
            deriver,
            backend,
            prefix: RwLock::new(prefix),
            node_id: RwLock::new(None),
        }
    }

    /// Replace the built-in key algorithm with a custom generator
    pub fn with_keygen(mut self, keygen: KeyGenerator) -> Self {
        self.deriver = self.deriver.with_keygen(keygen);
        self
    }

    /// Bind to a broker and compute the active key prefix
    ///
    /// Calling it again with the same broker leaves the cacher unchanged.
    pub fn init(&self, broker: &Arc<dyn Broker>) {
        let prefix = active_prefix(self.config.prefix.as_deref(), broker.namespace());

        *self.prefix.write().unwrap_or_else(|e| e.into_inner()) = prefix.clone();
        *self.node_id.write().unwrap_or_else(|e| e.into_inner()) =
            Some(broker.node_id().to_string());

        info!(
            target: CACHER_LOG_TARGET,
            node_id = broker.node_id(),
            backend = self.backend.provider_name(),
            prefix = %prefix,
            ttl = ?self.config.ttl,
            max_params_length = ?self.config.max_params_length,
            "Cacher initialized"
        );
    }

    /// Derive the unprefixed key for an invocation
    pub fn derive_key(
        &self,
        action_name: Option<&str>,
        params: Option<&Value>,
        meta: Option<&Value>,
        selectors: Option<&[String]>,
    ) -> Result<Option<String>> {
        self.deriver.derive_key(action_name, params, meta, selectors)
    }

    /// Active key prefix
    pub fn prefix(&self) -> String {
        self.prefix.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Node the cacher was bound to by `init`
    pub fn node_id(&self) -> Option<String> {
        self.node_id.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Configuration the cacher was built with
    pub fn config(&self) -> &CacherConfig {
        &self.config
    }

    /// Key deriver in use
    pub fn deriver(&self) -> &KeyDeriver {
        &self.deriver
    }

    /// Underlying backend
    pub fn backend(&self) -> &Arc<dyn CacheBackend> {
        &self.backend
    }

    /// Middleware that caches action results through this cacher
    pub fn middleware(self: &Arc<Self>) -> CacheMiddleware {
        CacheMiddleware::new(Arc::clone(self))
    }

    fn prefixed(&self, key: &str) -> String {
        let prefix = self.prefix.read().unwrap_or_else(|e| e.into_inner());
        format!("{prefix}{key}")
    }
}

/// Compute the prefix prepended to every backend key
pub fn active_prefix(custom: Option<&str>, namespace: Option<&str>) -> String {
    match custom.filter(|prefix| !prefix.is_empty()) {
        Some(prefix) => format!("{prefix}{KEY_PREFIX_SEPARATOR}"),
        None => match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => format!(
                "{DEFAULT_KEY_PREFIX}{KEY_PREFIX_SEPARATOR}{ns}{KEY_PREFIX_SEPARATOR}"
            ),
            None => format!("{DEFAULT_KEY_PREFIX}{KEY_PREFIX_SEPARATOR}"),
        },
    }
}

#[async_trait]
impl CacheBackend for Cacher {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let key = self.prefixed(key);
        self.backend.get(&key).await
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()> {
        let key = self.prefixed(key);
        let ttl = ttl.or_else(|| self.config.default_ttl());
        self.backend.set(&key, value, ttl).await
    }

    async fn del(&self, keys: &[String]) -> Result<()> {
        let keys: Vec<String> = keys.iter().map(|key| self.prefixed(key)).collect();
        self.backend.del(&keys).await
    }

    async fn clean(&self, pattern: &str) -> Result<()> {
        let pattern = self.prefixed(pattern);
        self.backend.clean(&pattern).await
    }

    async fn close(&self) -> Result<()> {
        self.backend.close().await
    }

    fn provider_name(&self) -> &str {
        self.backend.provider_name()
    }
}

impl std::fmt::Debug for Cacher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cacher")
            .field("prefix", &self.prefix())
            .field("node_id", &self.node_id())
            .field("config", &self.config)
            .field("deriver", &self.deriver)
            .field("backend", &self.backend)
            .finish()
    }
}
