//! Action result caching
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cacher`] | Configuration holder, key prefixing, broker binding |
//! | [`middleware`] | Wraps action handlers with get-before / set-after |
//! | [`factory`] | Builds the configured backend and cacher |
//!
//! Concrete backends live in `actcache-providers`.

pub mod cacher;
pub mod factory;
pub mod middleware;

pub use cacher::Cacher;
pub use factory::{create_cache_backend, create_cacher};
pub use middleware::{ActionHandler, CacheMiddleware};
