//! Identifier types for engine entities
//!
//! Order ids are opaque client-assigned strings; uniqueness across live
//! orders is the client's contract, emptiness is rejected by command
//! validation. Trades carry no separate id type; they are numbered by a
//! dense execution counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new OrderId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id never identifies an order
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
