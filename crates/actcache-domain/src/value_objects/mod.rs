//! Value Objects
//!
//! Immutable inputs of the cache layer.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ActionDescriptor`] | Action name plus its cache directive |
//! | [`CacheDirective`] | Disabled, enabled, or per-action options |
//! | [`CacheOptions`] | Per-action TTL and field selectors |
//! | [`InvocationContext`] | Params and metadata of one call |

/// Action descriptor and cache directive
pub mod action;
/// Invocation context
pub mod context;

pub use action::{ActionDescriptor, CacheDirective, CacheOptions};
pub use context::InvocationContext;
