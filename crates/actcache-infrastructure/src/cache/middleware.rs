//! Cache Middleware
//!
//! Wraps an action handler so that results are looked up before the handler
//! runs and stored after it returns. Actions whose cache directive is
//! disabled get their original handler back untouched.
//!
//! ## Example
//!
//! ```ignore
//! let handler: ActionHandler = Arc::new(|ctx| async move { find_posts(ctx).await }.boxed());
//! let action = ActionDescriptor::new("posts.find").with_cache(CacheOptions::new().with_ttl(30));
//!
//! let cached = cacher.middleware().wrap(handler, &action);
//! let posts = cached(InvocationContext::new().with_params(json!({ "limit": 10 }))).await?;
//! ```

use super::cacher::Cacher;
use crate::config::CacheFailurePolicy;
use crate::constants::CACHER_LOG_TARGET;
use actcache_domain::error::{Error, Result};
use actcache_domain::ports::CacheBackend;
use actcache_domain::value_objects::{ActionDescriptor, InvocationContext};
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Action handler as seen by the dispatcher
pub type ActionHandler =
    Arc<dyn Fn(InvocationContext) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// Handler wrapper that serves repeated invocations from the cache
///
/// Stateless apart from the cacher it is bound to; one instance wraps any
/// number of actions.
#[derive(Debug, Clone)]
pub struct CacheMiddleware {
    cacher: Arc<Cacher>,
    failure_policy: CacheFailurePolicy,
}

impl CacheMiddleware {
    /// Create a middleware using the cacher's configured failure policy
    pub fn new(cacher: Arc<Cacher>) -> Self {
        let failure_policy = cacher.config().failure_policy;
        Self {
            cacher,
            failure_policy,
        }
    }

    /// Override how backend `get` failures are handled
    pub fn with_failure_policy(mut self, policy: CacheFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Active failure policy
    pub fn failure_policy(&self) -> CacheFailurePolicy {
        self.failure_policy
    }

    /// Wrap `handler` according to the action's cache directive
    ///
    /// A disabled directive returns `handler` itself. Otherwise every call
    /// derives a key, returns a cached value when present, and on a miss runs
    /// the handler and stores its result with the directive's TTL.
    ///
    /// Errors from the handler are returned as they are. A failed `set` is
    /// logged and never fails the call; a failed `get` follows the failure
    /// policy.
    pub fn wrap(&self, handler: ActionHandler, action: &ActionDescriptor) -> ActionHandler {
        if !action.cache.is_enabled() {
            return handler;
        }

        let cacher = Arc::clone(&self.cacher);
        let policy = self.failure_policy;
        let name: Arc<str> = Arc::from(action.name.as_str());
        let keys: Option<Arc<[String]>> = action.cache.keys().map(Arc::from);
        let ttl = action.cache.ttl().map(Duration::from_secs);

        Arc::new(move |ctx: InvocationContext| {
            let cacher = Arc::clone(&cacher);
            let handler = Arc::clone(&handler);
            let name = Arc::clone(&name);
            let keys = keys.clone();

            async move {
                let key =
                    cacher.derive_key(Some(&*name), ctx.params(), ctx.meta(), keys.as_deref())?;
                let Some(key) = key else {
                    return handler(ctx).await;
                };

                match cacher.get(&key).await {
                    Ok(Some(cached)) if !cached.is_null() => {
                        debug!(target: CACHER_LOG_TARGET, action = %name, key = %key, "Cache hit");
                        return Ok(cached);
                    }
                    // A stored null counts as absent.
                    Ok(_) => {
                        debug!(target: CACHER_LOG_TARGET, action = %name, key = %key, "Cache miss");
                    }
                    Err(e) => match policy {
                        CacheFailurePolicy::Tolerate => {
                            warn!(
                                target: CACHER_LOG_TARGET,
                                action = %name,
                                key = %key,
                                error = %e,
                                "Cache lookup failed, running handler"
                            );
                        }
                        CacheFailurePolicy::Propagate => return Err(as_cache_failure(e)),
                    },
                }

                let result = handler(ctx).await?;

                if let Err(e) = cacher.set(&key, result.clone(), ttl).await {
                    warn!(
                        target: CACHER_LOG_TARGET,
                        action = %name,
                        key = %key,
                        error = %e,
                        "Failed to store action result in cache"
                    );
                }

                Ok(result)
            }
            .boxed()
        })
    }
}

/// Report any backend failure through the cache error channel
fn as_cache_failure(error: Error) -> Error {
    if error.is_cache_failure() {
        error
    } else {
        Error::cache_with_source("Cache lookup failed", error)
    }
}
