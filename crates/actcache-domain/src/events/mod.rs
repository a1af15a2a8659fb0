//! Broker Events
//!
//! Signals a broker broadcasts to cache backends.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`BrokerEvent`] | Cache invalidation and transport lifecycle signals |

/// Broker event definitions
pub mod broker_events;

pub use broker_events::BrokerEvent;
