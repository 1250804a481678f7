//! Trade tape records

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// A single execution on the tape
///
/// Append-only: once recorded, never mutated. `exec_id` is dense, starting
/// at 1 in tape order. The price is always the maker's price at the moment
/// of match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub buy_id: OrderId,
    pub sell_id: OrderId,
    pub price: Price,
    pub qty: Quantity,
    pub exec_id: u64,
}
