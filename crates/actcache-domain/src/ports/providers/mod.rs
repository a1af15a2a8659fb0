//! Provider ports

/// Cache backend port
pub mod cache;

pub use cache::CacheBackend;
