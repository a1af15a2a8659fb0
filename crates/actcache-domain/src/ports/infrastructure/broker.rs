//! Service Broker Port
//!
//! The part of the owning service broker the cache layer depends on: its
//! namespace (folded into the key prefix), its node identity (for log
//! context), and its event stream (consumed by backends for invalidation).

use crate::events::BrokerEvent;
use futures::Stream;
use std::pin::Pin;

/// Boxed async stream of broker events
pub type BrokerEventStream = Pin<Box<dyn Stream<Item = BrokerEvent> + Send + 'static>>;

/// Service broker interface consumed at cacher initialization
pub trait Broker: Send + Sync {
    /// Broker namespace, if any
    fn namespace(&self) -> Option<&str>;

    /// Identifier of the local node
    fn node_id(&self) -> &str;

    /// Subscribe to broker events
    fn subscribe_events(&self) -> BrokerEventStream;
}
