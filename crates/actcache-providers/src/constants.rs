//! Provider constants

// ============================================================================
// MEMORY BACKEND CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the memory backend
pub const MEMORY_CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

// ============================================================================
// REDIS BACKEND CONSTANTS
// ============================================================================

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Number of keys requested per SCAN round trip during clean
pub const REDIS_SCAN_BATCH_SIZE: usize = 100;
