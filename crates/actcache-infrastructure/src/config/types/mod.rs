//! Configuration types module

pub mod app;
pub mod broker;
pub mod cacher;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use broker::BrokerConfig;
pub use cacher::{BackendKind, CacheFailurePolicy, CacherConfig};
pub use logging::LoggingConfig;
