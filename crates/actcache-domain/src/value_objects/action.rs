//! Action descriptor and cache directive value objects

use serde::{Deserialize, Serialize};

/// Per-action cache options
///
/// `keys` keeps the distinction between an absent selector list (flatten
/// all params) and an empty one (key is the action name alone).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// TTL in seconds for entries produced by this action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,

    /// Ordered field selectors projected into the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

impl CacheOptions {
    /// Create empty cache options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TTL in seconds
    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl = Some(ttl_secs);
        self
    }

    /// Set the field selectors
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}

/// Cache directive attached to an action
///
/// Deserializes from `false`, `true`, or an options object, the same shapes
/// an action definition may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DirectiveRepr", into = "DirectiveRepr")]
pub enum CacheDirective {
    /// Caching disabled for this action
    #[default]
    Disabled,
    /// Caching enabled with framework defaults
    Enabled,
    /// Caching enabled with per-action options
    Options(CacheOptions),
}

impl CacheDirective {
    /// Whether the directive turns caching on
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Per-action TTL in seconds, when configured
    pub fn ttl(&self) -> Option<u64> {
        match self {
            Self::Options(options) => options.ttl,
            _ => None,
        }
    }

    /// Field selectors, when configured
    pub fn keys(&self) -> Option<&[String]> {
        match self {
            Self::Options(options) => options.keys.as_deref(),
            _ => None,
        }
    }
}

impl From<bool> for CacheDirective {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<CacheOptions> for CacheDirective {
    fn from(options: CacheOptions) -> Self {
        Self::Options(options)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DirectiveRepr {
    Flag(bool),
    Options(CacheOptions),
}

impl From<DirectiveRepr> for CacheDirective {
    fn from(repr: DirectiveRepr) -> Self {
        match repr {
            DirectiveRepr::Flag(enabled) => enabled.into(),
            DirectiveRepr::Options(options) => Self::Options(options),
        }
    }
}

impl From<CacheDirective> for DirectiveRepr {
    fn from(directive: CacheDirective) -> Self {
        match directive {
            CacheDirective::Disabled => Self::Flag(false),
            CacheDirective::Enabled => Self::Flag(true),
            CacheDirective::Options(options) => Self::Options(options),
        }
    }
}

/// Static description of a remote-callable action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Dot-segmented action name, e.g. `posts.find`
    pub name: String,

    /// Cache directive for the action
    #[serde(default)]
    pub cache: CacheDirective,
}

impl ActionDescriptor {
    /// Create a descriptor with caching disabled
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cache: CacheDirective::Disabled,
        }
    }

    /// Set the cache directive
    pub fn with_cache<D: Into<CacheDirective>>(mut self, cache: D) -> Self {
        self.cache = cache.into();
        self
    }
}
