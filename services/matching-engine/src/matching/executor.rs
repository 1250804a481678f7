//! Trade tape
//!
//! Append-only log of executions with dense numbering.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// The trade tape
///
/// Execution ids are `1 + count of prior trades`, so the tape is dense and
/// insertion order equals ascending `exec_id`.
#[derive(Debug, Default)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    /// Create an empty tape
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    /// Record a fill between the taker and a resting maker
    ///
    /// `taker_side` orients buyer and seller; the price is the maker's quote.
    pub fn record(
        &mut self,
        taker_side: Side,
        taker_id: &OrderId,
        maker_id: &OrderId,
        price: Price,
        qty: Quantity,
    ) {
        let (buy_id, sell_id) = match taker_side {
            Side::Buy => (taker_id.clone(), maker_id.clone()),
            Side::Sell => (maker_id.clone(), taker_id.clone()),
        };

        let exec_id = self.trades.len() as u64 + 1;
        self.trades.push(Trade {
            buy_id,
            sell_id,
            price,
            qty,
            exec_id,
        });
    }

    /// Number of recorded trades
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Check if the tape is empty
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// View the tape in execution order
    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    /// Consume the log, yielding the tape in execution order
    pub fn into_trades(self) -> Vec<Trade> {
        self.trades
    }
}
