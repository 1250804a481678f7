//! Command batch records
//!
//! One record per input command. Field names are stable for round-trip with
//! test fixtures; optional fields are omitted when absent, mirroring the
//! batch file format.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::{OrderType, Side};
use serde::{Deserialize, Serialize};

/// Recognized command verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    New,
    Cancel,
    Replace,
}

impl CommandKind {
    /// Parse a verb; `None` for anything outside the enumerated set
    pub fn parse(verb: &str) -> Option<Self> {
        match verb {
            "NEW" => Some(CommandKind::New),
            "CANCEL" => Some(CommandKind::Cancel),
            "REPLACE" => Some(CommandKind::Replace),
            _ => None,
        }
    }
}

/// A single entry of the command batch
///
/// The verb is kept as raw text so an unrecognized command deserializes
/// (and can be logged and skipped) instead of poisoning the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub cmd: String,
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<Quantity>,
}

impl CommandRecord {
    /// The parsed verb, if recognized
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::parse(&self.cmd)
    }
}
