//! Error taxonomy
//!
//! A rejected command never changes engine state; the reason is surfaced so
//! the caller can log it and move on. Batch-level parse and emit failures are
//! handled at the runner boundary, not here.

use thiserror::Error;

/// Why a command was dropped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("order id is empty")]
    EmptyId,

    #[error("missing quantity")]
    MissingQty,

    #[error("quantity must be strictly positive")]
    NonPositiveQty,

    #[error("missing side")]
    MissingSide,

    #[error("missing order type")]
    MissingType,

    #[error("limit order requires a price")]
    MissingPrice,

    #[error("market order must not carry a price")]
    UnexpectedPrice,

    #[error("unknown order id: {id}")]
    UnknownOrder { id: String },

    #[error("unknown command verb: {cmd}")]
    UnknownCommand { cmd: String },
}
