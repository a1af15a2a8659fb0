//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Key-shape constants are defined in `actcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "actcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "actcache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ACTCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_NESTED_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "ACTCACHE_LOG";

/// Default log file stem when the configured path has none
pub const LOG_FILE_DEFAULT_STEM: &str = "actcache";

// ============================================================================
// BROKER CONSTANTS
// ============================================================================

/// Capacity of the local broker event channel
pub const BROKER_EVENT_CHANNEL_CAPACITY: usize = 1024;

// ============================================================================
// CACHER CONSTANTS
// ============================================================================

/// Default maximum number of entries for the memory backend
pub const CACHER_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Tracing target used by the cacher and the cache middleware
pub const CACHER_LOG_TARGET: &str = "actcache::cacher";
