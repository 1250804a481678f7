//! Matching engine core
//!
//! Routes commands, runs the match loop, and owns all engine state: the two
//! priority books, the order index, the trade tape, and the admission
//! sequence counter. One engine serves one instrument; several engines can
//! coexist in a process because nothing here is global.

use types::command::{CommandKind, CommandRecord};
use types::errors::RejectReason;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook, OrderHandle};
use crate::index::OrderIndex;
use crate::matching::crossing;
use crate::matching::TradeLog;
use crate::snapshot::{self, BookSnapshot, ExecutionReport};

/// Single-instrument matching engine
///
/// A pure sequential state machine: the report is a function of the command
/// sequence alone. Ties between makers break on the admission sequence, and
/// the taker's position in the stream orders everything else.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    index: OrderIndex,
    log: TradeLog,
    seq: u64,
}

impl MatchingEngine {
    /// Create an engine with an empty book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            index: OrderIndex::new(),
            log: TradeLog::new(),
            seq: 0,
        }
    }

    /// Process one command
    ///
    /// A rejected command leaves every piece of state untouched; the reason
    /// is returned so the caller can log it and continue.
    pub fn apply(&mut self, record: &CommandRecord) -> Result<(), RejectReason> {
        match record.kind() {
            Some(CommandKind::New) => self.submit(record),
            Some(CommandKind::Cancel) => self.cancel(record),
            Some(CommandKind::Replace) => self.replace(record),
            None => Err(RejectReason::UnknownCommand {
                cmd: record.cmd.clone(),
            }),
        }
    }

    /// Trades recorded so far, in execution order
    pub fn trades(&self) -> &[Trade] {
        self.log.as_slice()
    }

    /// Orders currently reachable through the index
    pub fn resting_orders(&self) -> impl Iterator<Item = &Order> {
        self.index.iter()
    }

    /// Consume the engine: drain both books into the final sorted book and
    /// hand the tape over
    pub fn into_report(mut self) -> ExecutionReport {
        let bids = snapshot::drain_side(|| self.bids.pop_best(), &mut self.index);
        let asks = snapshot::drain_side(|| self.asks.pop_best(), &mut self.index);
        ExecutionReport {
            trades: self.log.into_trades(),
            order_book: BookSnapshot { bids, asks },
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// NEW: validate, match against the opposite side, rest the residual
    fn submit(&mut self, record: &CommandRecord) -> Result<(), RejectReason> {
        let (side, order_type, price, qty) = validate_new(record)?;

        let mut taker = Order {
            id: record.id.clone(),
            side,
            order_type,
            price,
            qty,
            seq: self.next_seq(),
            canceled: false,
        };

        match taker.side {
            Side::Buy => {
                Self::match_against_asks(&mut self.asks, &mut self.index, &mut self.log, &mut taker)
            }
            Side::Sell => {
                Self::match_against_bids(&mut self.bids, &mut self.index, &mut self.log, &mut taker)
            }
        }

        // Residual LIMIT rests; residual MARKET evaporates.
        if taker.qty.is_positive() && taker.is_limit() {
            if let Some(limit) = taker.price {
                let handle = OrderHandle {
                    order_id: taker.id.clone(),
                    seq: taker.seq,
                };
                match taker.side {
                    Side::Buy => self.bids.push(limit, handle),
                    Side::Sell => self.asks.push(limit, handle),
                }
                self.index.insert(taker);
            }
        }

        Ok(())
    }

    /// Walk the ask side best-first for an incoming buy
    fn match_against_asks(
        asks: &mut AskBook,
        index: &mut OrderIndex,
        log: &mut TradeLog,
        taker: &mut Order,
    ) {
        while taker.qty.is_positive() {
            let Some((maker_price, handle)) = asks.peek_best() else {
                break;
            };
            let maker_id = handle.order_id.clone();
            let handle_seq = handle.seq;

            let live = index
                .get(&maker_id)
                .map(|maker| maker.seq == handle_seq && !maker.canceled)
                .unwrap_or(false);
            if !live {
                // Canceled or replaced top; discard and look again.
                asks.pop_best();
                continue;
            }

            if !crossing::taker_crosses(taker, maker_price) {
                break;
            }

            let Some(maker) = index.get_mut(&maker_id) else {
                break;
            };
            let fill = taker.qty.min(maker.qty);
            maker.fill(fill);
            taker.fill(fill);
            log.record(taker.side, &taker.id, &maker_id, maker_price, fill);

            if maker.qty.is_zero() {
                asks.pop_best();
                index.remove(&maker_id);
            }
        }
    }

    /// Walk the bid side best-first for an incoming sell
    fn match_against_bids(
        bids: &mut BidBook,
        index: &mut OrderIndex,
        log: &mut TradeLog,
        taker: &mut Order,
    ) {
        while taker.qty.is_positive() {
            let Some((maker_price, handle)) = bids.peek_best() else {
                break;
            };
            let maker_id = handle.order_id.clone();
            let handle_seq = handle.seq;

            let live = index
                .get(&maker_id)
                .map(|maker| maker.seq == handle_seq && !maker.canceled)
                .unwrap_or(false);
            if !live {
                bids.pop_best();
                continue;
            }

            if !crossing::taker_crosses(taker, maker_price) {
                break;
            }

            let Some(maker) = index.get_mut(&maker_id) else {
                break;
            };
            let fill = taker.qty.min(maker.qty);
            maker.fill(fill);
            taker.fill(fill);
            log.record(taker.side, &taker.id, &maker_id, maker_price, fill);

            if maker.qty.is_zero() {
                bids.pop_best();
                index.remove(&maker_id);
            }
        }
    }

    /// CANCEL: flag only; the book handle is discarded lazily
    fn cancel(&mut self, record: &CommandRecord) -> Result<(), RejectReason> {
        let Some(order) = self.index.get_mut(&record.id) else {
            return Err(RejectReason::UnknownOrder {
                id: record.id.to_string(),
            });
        };
        order.canceled = true;
        Ok(())
    }

    /// REPLACE: reset price/qty, clear the cancel flag, demote time priority
    ///
    /// Side and type stay what the original order declared. The old book
    /// handle is left behind and goes stale through the sequence refresh; a
    /// fresh handle re-enters at the new key. No matching happens here: the
    /// replaced order waits for the next taker.
    fn replace(&mut self, record: &CommandRecord) -> Result<(), RejectReason> {
        if !self.index.contains(&record.id) {
            return Err(RejectReason::UnknownOrder {
                id: record.id.to_string(),
            });
        }

        let qty = record.qty.ok_or(RejectReason::MissingQty)?;
        if !qty.is_positive() {
            return Err(RejectReason::NonPositiveQty);
        }
        let price = record.price.ok_or(RejectReason::MissingPrice)?;

        let seq = self.next_seq();
        let Some(order) = self.index.get_mut(&record.id) else {
            return Err(RejectReason::UnknownOrder {
                id: record.id.to_string(),
            });
        };
        order.price = Some(price);
        order.qty = qty;
        order.seq = seq;
        order.canceled = false;

        let handle = OrderHandle {
            order_id: order.id.clone(),
            seq,
        };
        match order.side {
            Side::Buy => self.bids.push(price, handle),
            Side::Sell => self.asks.push(price, handle),
        }

        Ok(())
    }
}

/// NEW command validation
///
/// Shape errors reject the command; nothing here mutates state.
fn validate_new(
    record: &CommandRecord,
) -> Result<(Side, OrderType, Option<Price>, Quantity), RejectReason> {
    if record.id.is_empty() {
        return Err(RejectReason::EmptyId);
    }
    let qty = record.qty.ok_or(RejectReason::MissingQty)?;
    if !qty.is_positive() {
        return Err(RejectReason::NonPositiveQty);
    }
    let side = record.side.ok_or(RejectReason::MissingSide)?;
    let order_type = record.order_type.ok_or(RejectReason::MissingType)?;

    match order_type {
        OrderType::Limit if record.price.is_none() => Err(RejectReason::MissingPrice),
        OrderType::Market if record.price.is_some() => Err(RejectReason::UnexpectedPrice),
        _ => Ok((side, order_type, record.price, qty)),
    }
}
