//! Final report assembly
//!
//! At end-of-stream the books are drained best-first into the definitive
//! sorted book; together with the trade tape this forms the run's output.

use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::trade::Trade;

use crate::book::price_level::OrderHandle;
use crate::index::OrderIndex;

/// One resting order in the final book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRow {
    pub id: OrderId,
    pub price: Price,
    pub qty: Quantity,
}

/// Residual book, best-first on both sides
///
/// Bids descend by price, asks ascend; within a price level, earlier
/// admission first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<BookRow>,
    pub asks: Vec<BookRow>,
}

/// Everything a run produces: the tape plus the residual book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub trades: Vec<Trade>,
    pub order_book: BookSnapshot,
}

/// Drain one book side best-first into report rows
///
/// Canceled and stale handles surface here for the last time and are
/// discarded; live rows leave the index as they are reported.
pub(crate) fn drain_side(
    mut pop_best: impl FnMut() -> Option<(Price, OrderHandle)>,
    index: &mut OrderIndex,
) -> Vec<BookRow> {
    let mut rows = Vec::new();
    while let Some((price, handle)) = pop_best() {
        let Some(order) = index.get(&handle.order_id) else {
            continue;
        };
        if order.seq != handle.seq || !order.is_live() {
            continue;
        }
        rows.push(BookRow {
            id: handle.order_id.clone(),
            price,
            qty: order.qty,
        });
        index.remove(&handle.order_id);
    }
    rows
}
