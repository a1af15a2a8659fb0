//! Cache Backend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullCacheBackend`] | Testing | No-op stub, always misses |
//! | [`MemoryCacheBackend`] | Local | In-memory Moka cache with per-entry TTL |
//! | [`RedisCacheBackend`] | Distributed | Redis-backed for multi-node brokers |
//!
//! ## Backend Selection Guide
//!
//! - **Development/Testing**: Use `NullCacheBackend` for unit tests
//! - **Single Node**: Use `MemoryCacheBackend`
//! - **Multi Node**: Use `RedisCacheBackend` so every node sees the same entries

#[cfg(feature = "cache-memory")]
pub mod memory;
pub mod null;
#[cfg(feature = "cache-memory")]
pub mod pattern;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-memory")]
pub use memory::MemoryCacheBackend;
pub use null::NullCacheBackend;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheBackend;
