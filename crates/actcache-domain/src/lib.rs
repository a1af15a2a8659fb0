//! # Domain Layer
//!
//! Core types and pure logic of the action cache: how an invocation becomes a
//! cache key, what an action's cache directive means, and the ports through
//! which the cache layer talks to its backend and its broker.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache_key`] | Deterministic, length-bounded key derivation |
//! | [`value_objects`] | Action descriptor, cache directive, invocation context |
//! | [`ports`] | `CacheBackend` and `Broker` interfaces |
//! | [`events`] | Broker events consumed by backends |
//! | [`constants`] | Key separators, tokens and prefix defaults |
//! | [`error`] | Domain error type |
//!
//! Nothing here performs I/O.

pub mod cache_key;
pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use cache_key::{KeyDeriver, KeyGenerator};
pub use error::{Error, Result};
pub use events::BrokerEvent;
pub use ports::{Broker, BrokerEventStream, CacheBackend};
pub use value_objects::{ActionDescriptor, CacheDirective, CacheOptions, InvocationContext};
