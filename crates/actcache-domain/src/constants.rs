//! Domain layer constants
//!
//! Constants that define the shape of derived cache keys. Backend and
//! configuration defaults live in the infrastructure and provider crates.

// ============================================================================
// CACHE KEY CONSTANTS
// ============================================================================

/// Separator between the action name and the value part of a key
pub const CACHE_KEY_ACTION_SEPARATOR: &str = ":";

/// Separator between flattened segments of the value part
pub const CACHE_KEY_SEGMENT_SEPARATOR: &str = "|";

/// Selector prefix that resolves the path against invocation metadata
pub const CACHE_KEY_META_PREFIX: char = '#';

/// Path separator inside a selector
pub const CACHE_KEY_PATH_SEPARATOR: char = '.';

/// Token rendered for a selector that resolves to nothing
pub const CACHE_KEY_UNDEFINED_TOKEN: &str = "undefined";

/// Token rendered for an explicit null value
pub const CACHE_KEY_NULL_TOKEN: &str = "null";

/// Length of the base64-encoded SHA-256 digest used for oversized keys
pub const CACHE_KEY_DIGEST_LENGTH: usize = 44;

// ============================================================================
// KEY PREFIX CONSTANTS
// ============================================================================

/// Prefix applied to backend keys when none is configured
pub const DEFAULT_KEY_PREFIX: &str = "MOL";

/// Separator appended after each prefix component
pub const KEY_PREFIX_SEPARATOR: &str = "-";
