//! Matching engine for a single trading instrument
//!
//! Price-time priority matching over a finite, ordered command stream.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced; ties break on admission sequence
//! - Deterministic: same command stream, same tape and residual book
//! - MARKET orders never rest
//! - Execution ids are dense, starting at 1
//! - Conservation of quantity through fills

pub mod book;
pub mod engine;
pub mod index;
pub mod matching;
pub mod snapshot;

pub use engine::MatchingEngine;
pub use snapshot::{BookRow, BookSnapshot, ExecutionReport};
