//! Infrastructure collaborator ports

/// Service broker port
pub mod broker;

pub use broker::{Broker, BrokerEventStream};
