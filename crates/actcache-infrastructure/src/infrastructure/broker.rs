//! Local Broker
//!
//! In-process implementation of the [`Broker`] port. Events are distributed
//! through a tokio broadcast channel to every subscriber alive at the time of
//! the emit; nothing is persisted or replayed.

use crate::config::BrokerConfig;
use crate::constants::BROKER_EVENT_CHANNEL_CAPACITY;
use actcache_domain::events::BrokerEvent;
use actcache_domain::ports::{Broker, BrokerEventStream};
use futures::stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Broker backed by a tokio broadcast channel
#[derive(Clone)]
pub struct LocalBroker {
    namespace: Option<String>,
    node_id: String,
    sender: Arc<broadcast::Sender<BrokerEvent>>,
    capacity: usize,
}

impl LocalBroker {
    /// Create a broker from configuration with the default channel capacity
    pub fn new(config: &BrokerConfig) -> Self {
        Self::with_capacity(config, BROKER_EVENT_CHANNEL_CAPACITY)
    }

    /// Create a broker with a custom channel capacity
    pub fn with_capacity(config: &BrokerConfig, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        let node_id = config
            .node_id
            .clone()
            .unwrap_or_else(|| format!("node-{}", uuid::Uuid::new_v4()));

        Self {
            namespace: config.namespace.clone(),
            node_id,
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared(config: &BrokerConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    /// Broadcast an event, returning the number of subscribers reached
    pub fn emit(&self, event: BrokerEvent) -> usize {
        match self.sender.send(event) {
            Ok(count) => {
                debug!(subscribers = count, "Broker event emitted");
                count
            }
            Err(_) => {
                debug!("Broker event emitted but no subscribers");
                0
            }
        }
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Broker for LocalBroker {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn node_id(&self) -> &str {
        &self.node_id
    }

    fn subscribe_events(&self) -> BrokerEventStream {
        let receiver = self.sender.subscribe();

        let events = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Broker event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(events)
    }
}

impl std::fmt::Debug for LocalBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalBroker")
            .field("namespace", &self.namespace)
            .field("node_id", &self.node_id)
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
