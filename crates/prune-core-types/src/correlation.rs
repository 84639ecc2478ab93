//! Correlation identifiers for removal operations
//!
//! A single call to the removal engine may cascade through several
//! ancestors. Every event it logs carries the same `OperationId` so the
//! cascade can be reassembled from structured logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier shared by all events of one removal (including its cascades)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationId(String);

impl OperationId {
    /// Generate a new time-ordered OperationId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
