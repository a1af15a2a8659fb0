//! Main application configuration

use super::{BrokerConfig, CacherConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration document
///
/// Each section maps to a TOML table (`[logging]`, `[broker]`, `[cacher]`)
/// and to an environment variable group (`ACTCACHE_CACHER__TTL`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Local broker configuration
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Cacher configuration
    #[serde(default)]
    pub cacher: CacherConfig,
}
