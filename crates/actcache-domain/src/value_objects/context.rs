//! Invocation context value object

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-call input of an action: parameters plus request metadata
///
/// The cache layer only reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
    /// Action parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request metadata (authenticated user, tenant, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl InvocationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameters
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the metadata
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Borrow the parameters
    pub fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// Borrow the metadata
    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }
}
