//! Configuration management
//!
//! Typed configuration sections and the figment-based loader that merges
//! defaults, a TOML file and `ACTCACHE_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
