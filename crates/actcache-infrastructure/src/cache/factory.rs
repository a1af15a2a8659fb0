//! Backend and cacher construction
//!
//! Selects the concrete backend named by [`CacherConfig::backend`].

use super::cacher::Cacher;
use crate::config::{BackendKind, CacherConfig};
use crate::constants::CACHER_LOG_TARGET;
use actcache_domain::error::{Error, Result};
use actcache_domain::ports::{Broker, CacheBackend};
use actcache_providers::cache::{MemoryCacheBackend, NullCacheBackend, RedisCacheBackend};
use std::sync::Arc;
use tracing::debug;

/// Build the backend selected by `config`
///
/// The default TTL is applied by the [`Cacher`], so backends are built
/// without one.
pub fn create_cache_backend(config: &CacherConfig) -> Result<Arc<dyn CacheBackend>> {
    let backend: Arc<dyn CacheBackend> = match config.backend {
        BackendKind::Memory => Arc::new(MemoryCacheBackend::with_capacity(config.max_entries)),
        BackendKind::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                Error::configuration("Cacher redis_url is required for the redis backend")
            })?;
            Arc::new(RedisCacheBackend::new(url)?)
        }
        BackendKind::Null => Arc::new(NullCacheBackend::new()),
    };

    debug!(target: CACHER_LOG_TARGET, backend = backend.provider_name(), "Cache backend created");
    Ok(backend)
}

/// Build the configured backend and a cacher bound to `broker`
///
/// The memory backend also follows the broker's invalidation events, which
/// needs a running Tokio runtime. Event keys and patterns address stored
/// (prefixed) keys.
pub fn create_cacher(config: &CacherConfig, broker: &Arc<dyn Broker>) -> Result<Arc<Cacher>> {
    let backend: Arc<dyn CacheBackend> = match config.backend {
        BackendKind::Memory => {
            tokio::runtime::Handle::try_current().map_err(|e| Error::Infrastructure {
                message: "The memory backend event listener needs a Tokio runtime".to_string(),
                source: Some(Box::new(e)),
            })?;
            let memory = Arc::new(MemoryCacheBackend::with_capacity(config.max_entries));
            let _listener = memory.spawn_event_listener(broker.subscribe_events());
            memory
        }
        _ => create_cache_backend(config)?,
    };

    let cacher = Arc::new(Cacher::new(config.clone(), backend));
    cacher.init(broker);
    Ok(cacher)
}
