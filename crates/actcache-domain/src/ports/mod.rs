//! Domain Port Interfaces
//!
//! Boundaries between the cache core and its external collaborators.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CacheBackend`] | Storage capability a concrete cache must provide |
//! | [`Broker`] | Namespace and event source of the owning service broker |

/// Infrastructure collaborator ports
pub mod infrastructure;
/// Provider ports
pub mod providers;

pub use infrastructure::{Broker, BrokerEventStream};
pub use providers::CacheBackend;
