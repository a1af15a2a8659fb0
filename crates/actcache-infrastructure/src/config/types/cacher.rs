//! Cacher configuration types

use crate::constants::CACHER_DEFAULT_MAX_ENTRIES;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Concrete cache backend selected at construction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process Moka cache
    #[default]
    Memory,
    /// Shared Redis store
    Redis,
    /// Discards writes, always misses
    Null,
}

/// How the middleware reacts when a backend `get` fails
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheFailurePolicy {
    /// Log a warning and run the handler as on a miss
    #[default]
    Tolerate,
    /// Fail the invocation with `Error::Cache`
    Propagate,
}

/// Cacher configuration
///
/// All fields are fixed after construction; only the active key prefix is
/// computed later, when the cacher binds to its broker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacherConfig {
    /// Default TTL in seconds for entries stored without one (None = no expiry)
    pub ttl: Option<u64>,

    /// Maximum length of the value part of a key before the digest fallback
    pub max_params_length: Option<usize>,

    /// Custom key prefix; replaces `MOL-<namespace>-` when set
    pub prefix: Option<String>,

    /// Backend implementation
    pub backend: BackendKind,

    /// Maximum entries held by the memory backend
    pub max_entries: u64,

    /// Redis connection URL, required for the Redis backend
    pub redis_url: Option<String>,

    /// Backend `get` failure handling
    pub failure_policy: CacheFailurePolicy,
}

impl CacherConfig {
    /// Default TTL as a duration
    pub fn default_ttl(&self) -> Option<Duration> {
        self.ttl.map(Duration::from_secs)
    }
}

impl Default for CacherConfig {
    fn default() -> Self {
        Self {
            ttl: None,
            max_params_length: None,
            prefix: None,
            backend: BackendKind::default(),
            max_entries: CACHER_DEFAULT_MAX_ENTRIES,
            redis_url: None,
            failure_policy: CacheFailurePolicy::default(),
        }
    }
}
