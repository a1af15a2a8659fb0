//! Broker configuration types

use serde::{Deserialize, Serialize};

/// Local broker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrokerConfig {
    /// Namespace folded into the default cache key prefix
    pub namespace: Option<String>,

    /// Node identifier; a random one is generated when unset
    pub node_id: Option<String>,
}
