//! Batch matching engine CLI
//!
//! Reads a JSON command batch, runs it through the matching engine, and
//! writes the execution report to stdout. Logs and the latency histogram go
//! to stderr so stdout stays machine-readable.

mod input;
mod metrics;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use matching_engine::MatchingEngine;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use types::errors::RejectReason;

#[derive(Parser, Debug)]
#[command(name = "batch-runner", about = "Run an order command batch through the matching engine")]
struct Cli {
    /// Path to the JSON command batch
    input: PathBuf,

    /// Default log filter (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    let commands = input::load_batch(&cli.input)?;
    info!(commands = commands.len(), "loaded command batch");

    let mut engine = MatchingEngine::new();
    let mut histogram = metrics::LatencyHistogram::new();
    let started = Instant::now();

    for command in &commands {
        let begin = Instant::now();
        if let Err(reason) = engine.apply(command) {
            match &reason {
                RejectReason::UnknownCommand { .. } => {
                    warn!(%reason, id = %command.id, "skipping command")
                }
                _ => debug!(%reason, id = %command.id, "dropped command"),
            }
        }
        histogram.record(begin.elapsed());
    }

    let report = engine.into_report();
    output::write_report(&report, std::io::stdout().lock())?;

    info!(
        trades = report.trades.len(),
        bids = report.order_book.bids.len(),
        asks = report.order_book.asks.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "run complete"
    );
    for bucket in histogram.buckets() {
        if bucket.count > 0 {
            info!(range = bucket.label, count = bucket.count, "latency");
        }
    }

    Ok(())
}
