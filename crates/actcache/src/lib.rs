//! # actcache
//!
//! Action result caching for service brokers: deterministic, length-bounded
//! cache keys derived from an action invocation, and a middleware that serves
//! repeated invocations from a pluggable backend.
//!
//! ## Example
//!
//! ```ignore
//! use actcache::domain::{ActionDescriptor, CacheOptions, InvocationContext};
//! use actcache::infrastructure::cache::create_cacher;
//!
//! let cacher = create_cacher(&config.cacher, &broker)?;
//! let action = ActionDescriptor::new("posts.find").with_cache(CacheOptions::new().with_ttl(30));
//! let cached = cacher.middleware().wrap(handler, &action);
//!
//! let posts = cached(InvocationContext::new().with_params(json!({ "limit": 10 }))).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Key derivation, value objects, ports, domain errors
//! - `providers` - Memory, Redis and null cache backends
//! - `infrastructure` - Cacher, cache middleware, config, logging, local broker
//! - `cli` - The `actcache` command line

/// Domain layer - key derivation and core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use actcache_domain::*;
}

/// Provider layer - concrete cache backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use actcache_providers::*;
}

/// Infrastructure layer - cacher, middleware, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use actcache_infrastructure::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use domain::{
    ActionDescriptor, CacheDirective, CacheOptions, Error, InvocationContext, KeyDeriver, Result,
};
pub use infrastructure::{ActionHandler, CacheMiddleware, Cacher};
