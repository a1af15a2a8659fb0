//! Broker event definitions

use serde::{Deserialize, Serialize};

/// Events a broker publishes to interested cache backends
///
/// Concrete backends subscribe to these to drop entries that other nodes
/// invalidated, or that may be stale after a transport reconnect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrokerEvent {
    /// Remove every entry whose key matches the pattern (None = all entries)
    CacheClean {
        /// Backend-defined match pattern
        pattern: Option<String>,
    },
    /// Remove the listed entries
    CacheDel {
        /// Keys to remove
        keys: Vec<String>,
    },
    /// The broker's transport (re)connected to the cluster
    TransporterConnected,
}
