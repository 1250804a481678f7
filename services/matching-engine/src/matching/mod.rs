//! Matching logic module
//!
//! Crossing predicates and the trade tape used by the engine core.

pub mod crossing;
pub mod executor;

pub use crossing::{can_match, taker_crosses};
pub use executor::TradeLog;
