//! Cache Key Derivation
//!
//! Turns an action invocation into a deterministic, bounded-length string key.
//!
//! ## Key shapes
//!
//! | Input | Key |
//! |-------|-----|
//! | no params, no selectors | `name` |
//! | empty selector list | `name` |
//! | selectors `["a", "#user"]` | `name:<a>\|<meta.user>` |
//! | params, no selectors | `name:k1\|v1\|k2\|v2...` |
//!
//! When a maximum length is configured, the value part (everything after
//! `name:`) is bounded by [`digest::bound_length`].
//!
//! ## Example
//!
//! ```
//! use actcache_domain::cache_key::KeyDeriver;
//! use serde_json::json;
//!
//! let deriver = KeyDeriver::new();
//! let key = deriver
//!     .derive_key(Some("user"), Some(&json!({ "a": 5, "name": "Bob" })), None, None)
//!     .unwrap();
//! assert_eq!(key.as_deref(), Some("user:a|5|name|Bob"));
//! ```

/// Digest fallback for oversized keys
pub mod digest;
/// Field resolution and flattening
pub mod field;

pub use field::FieldValue;

use crate::constants::{
    CACHE_KEY_ACTION_SEPARATOR, CACHE_KEY_META_PREFIX, CACHE_KEY_SEGMENT_SEPARATOR,
};
use crate::error::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Custom key generator
///
/// Receives the action name, params, meta and selectors; its result is used
/// verbatim and its errors reach the caller unmodified.
pub type KeyGenerator = Arc<
    dyn Fn(&str, Option<&Value>, Option<&Value>, Option<&[String]>) -> Result<String>
        + Send
        + Sync,
>;

/// Derives cache keys from action invocations
///
/// Holds no state besides its configuration and never suspends, so a single
/// instance can be shared across any number of concurrent invocations.
#[derive(Clone, Default)]
pub struct KeyDeriver {
    max_params_length: Option<usize>,
    keygen: Option<KeyGenerator>,
}

impl KeyDeriver {
    /// Create a deriver with no length bound and the built-in algorithm
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the value part of derived keys to `max` characters
    ///
    /// A bound of zero leaves keys unbounded.
    pub fn with_max_params_length(mut self, max: Option<usize>) -> Self {
        self.max_params_length = max.filter(|max| *max > 0);
        self
    }

    /// Replace the built-in algorithm with a custom generator
    pub fn with_keygen(mut self, keygen: KeyGenerator) -> Self {
        self.keygen = Some(keygen);
        self
    }

    /// Configured maximum length of the value part
    pub fn max_params_length(&self) -> Option<usize> {
        self.max_params_length
    }

    /// Whether a custom generator is installed
    pub fn has_custom_keygen(&self) -> bool {
        self.keygen.is_some()
    }

    /// Derive the cache key for an invocation
    ///
    /// Returns `Ok(None)` when there is no action name. Errors only come from
    /// a custom key generator.
    pub fn derive_key(
        &self,
        action_name: Option<&str>,
        params: Option<&Value>,
        meta: Option<&Value>,
        selectors: Option<&[String]>,
    ) -> Result<Option<String>> {
        let Some(name) = action_name else {
            return Ok(None);
        };

        if let Some(keygen) = &self.keygen {
            return keygen(name, params, meta, selectors).map(Some);
        }

        Ok(Some(self.default_key(name, params, meta, selectors)))
    }

    /// Built-in key derivation, ignoring any custom generator
    pub fn default_key(
        &self,
        name: &str,
        params: Option<&Value>,
        meta: Option<&Value>,
        selectors: Option<&[String]>,
    ) -> String {
        // Top-level null params count as absent
        let params = params.filter(|value| !value.is_null());

        let value_part = match (selectors, params) {
            (None, None) => return name.to_string(),
            (Some([]), _) => return name.to_string(),
            (Some(selectors), params) => project_selectors(selectors, params, meta),
            (None, Some(params)) => FieldValue::of(params).flatten(),
        };

        let value_part = match self.max_params_length {
            Some(max) => digest::bound_length(value_part, max),
            None => value_part,
        };

        format!("{name}{CACHE_KEY_ACTION_SEPARATOR}{value_part}")
    }
}

/// Resolve each selector in order and join the flattened values
fn project_selectors(selectors: &[String], params: Option<&Value>, meta: Option<&Value>) -> String {
    let mut out = String::new();
    for (index, selector) in selectors.iter().enumerate() {
        if index > 0 {
            out.push_str(CACHE_KEY_SEGMENT_SEPARATOR);
        }
        let field = match selector.strip_prefix(CACHE_KEY_META_PREFIX) {
            Some(path) => FieldValue::resolve(meta, path),
            None => FieldValue::resolve(params, selector),
        };
        field.write_flattened(&mut out);
    }
    out
}

impl fmt::Debug for KeyDeriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDeriver")
            .field("max_params_length", &self.max_params_length)
            .field("custom_keygen", &self.keygen.is_some())
            .finish()
    }
}
