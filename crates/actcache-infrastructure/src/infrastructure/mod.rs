//! Infrastructure collaborators
//!
//! In-process stand-ins for services the cache layer talks to.

pub mod broker;

pub use broker::LocalBroker;
