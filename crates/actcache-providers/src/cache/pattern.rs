//! Glob matching for cache clean patterns
//!
//! `*` and `**` both match any run of characters (keys have no path
//! structure), `?` matches a single character, `[...]` a class.

use actcache_domain::error::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};

/// Compile a clean pattern into a matcher
pub fn compile(pattern: &str) -> Result<GlobMatcher> {
    let normalized = pattern.replace("**", "*");
    GlobBuilder::new(&normalized)
        .literal_separator(false)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            Error::invalid_argument(format!("Invalid cache clean pattern '{pattern}': {e}"))
        })
}
