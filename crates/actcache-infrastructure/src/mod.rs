//! # Infrastructure Layer
//!
//! Runtime wiring around the domain's key deriver and the provider backends.
//!
//! ## Module Categories
//!
//! ### Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Cacher lifecycle, cache middleware, backend factory |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration with figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Collaborators
//! | Module | Description |
//! |--------|-------------|
//! | [`infrastructure`] | In-process broker |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

// Re-export commonly used types
pub use cache::{ActionHandler, CacheMiddleware, Cacher};
pub use error_ext::ErrorContext;
pub use infrastructure::LocalBroker;
