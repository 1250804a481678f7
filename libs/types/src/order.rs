//! Order lifecycle types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Execute only at the stated price or better; residual rests
    Limit,
    /// Execute immediately against the book; never rests
    Market,
}

/// A live order record
///
/// The identity fields (`id`, `side`, `order_type`) are fixed at admission.
/// `qty` is the residual and only decreases through matching; `price`, `qty`
/// and `seq` are reset together by a successful replace; `canceled` marks the
/// record as logically removed while its book handle may still linger.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    /// Present iff `order_type` is `Limit`
    pub price: Option<Price>,
    /// Residual quantity, strictly positive while resting
    pub qty: Quantity,
    /// Admission sequence, refreshed on replace; sole time-priority key
    pub seq: u64,
    pub canceled: bool,
}

impl Order {
    pub fn is_market(&self) -> bool {
        self.order_type == OrderType::Market
    }

    pub fn is_limit(&self) -> bool {
        self.order_type == OrderType::Limit
    }

    /// Still matchable and reportable
    pub fn is_live(&self) -> bool {
        !self.canceled && self.qty.is_positive()
    }

    /// Decrement the residual by a fill amount
    pub fn fill(&mut self, qty: Quantity) {
        self.qty = self.qty - qty;
    }
}
