//! # actcache - Backend Implementations
//!
//! Concrete cache backends. Each one implements the `CacheBackend` port
//! defined in `actcache-domain`; the cache core never depends on them
//! directly and selects one at construction time.
//!
//! | Backend | Type | Feature |
//! |---------|------|---------|
//! | [`cache::MemoryCacheBackend`] | Local, Moka | `cache-memory` (default) |
//! | [`cache::RedisCacheBackend`] | Distributed | `cache-redis` |
//! | [`cache::NullCacheBackend`] | Testing | always |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! actcache-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export domain types commonly used with providers
pub use actcache_domain::error::{Error, Result};
pub use actcache_domain::ports::CacheBackend;

/// Provider-specific constants
pub mod constants;

/// Cache backend implementations
pub mod cache;
