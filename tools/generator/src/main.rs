//! Synthetic workload generator
//!
//! Writes a reproducible command batch for soak and throughput runs against
//! the matching engine. Deterministic seeded RNG: same seed, same file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use types::command::CommandRecord;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};

/// Share of NEW orders submitted as MARKET
const MARKET_RATIO: f64 = 0.05;
/// Share of commands that cancel an earlier order
const CANCEL_RATIO: f64 = 0.05;
/// Share of commands that replace an earlier order
const REPLACE_RATIO: f64 = 0.05;

#[derive(Parser, Debug)]
#[command(name = "generator", about = "Generate a synthetic order command batch")]
struct Cli {
    /// Number of commands to generate
    #[arg(long, default_value_t = 1_000_000)]
    count: usize,

    /// RNG seed; the batch is a pure function of seed and shape options
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Lowest limit price in the band
    #[arg(long, default_value_t = 95)]
    price_floor: u64,

    /// Number of one-unit price steps above the floor
    #[arg(long, default_value_t = 10)]
    price_steps: u64,

    /// Output path
    #[arg(long, default_value = "orders.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let batch = generate(cli.count, cli.seed, cli.price_floor, cli.price_steps);

    let file = File::create(&cli.out)
        .with_context(|| format!("creating output file {}", cli.out.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &batch).context("encoding batch")?;
    writer.write_all(b"\n").context("writing batch")?;
    writer.flush().context("flushing batch")?;

    eprintln!("wrote {} commands to {}", batch.len(), cli.out.display());
    Ok(())
}

/// Build the command batch
///
/// Mostly NEW LIMIT orders inside the price band, with a minority of MARKET
/// orders plus CANCEL/REPLACE commands aimed at previously submitted ids.
fn generate(count: usize, seed: u64, price_floor: u64, price_steps: u64) -> Vec<CommandRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut batch = Vec::with_capacity(count);
    let mut submitted: u64 = 0;

    for _ in 0..count {
        if submitted > 0 && rng.gen_bool(CANCEL_RATIO) {
            let target = rng.gen_range(1..=submitted);
            batch.push(CommandRecord {
                cmd: "CANCEL".to_string(),
                id: OrderId::new(format!("O-{target}")),
                side: None,
                order_type: None,
                price: None,
                qty: None,
            });
            continue;
        }

        if submitted > 0 && rng.gen_bool(REPLACE_RATIO) {
            let target = rng.gen_range(1..=submitted);
            batch.push(CommandRecord {
                cmd: "REPLACE".to_string(),
                id: OrderId::new(format!("O-{target}")),
                side: None,
                order_type: None,
                price: Some(Price::from_u64(price_floor + rng.gen_range(0..price_steps))),
                qty: Some(Quantity::from_u64(rng.gen_range(1..=10))),
            });
            continue;
        }

        submitted += 1;
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let is_market = rng.gen_bool(MARKET_RATIO);
        batch.push(CommandRecord {
            cmd: "NEW".to_string(),
            id: OrderId::new(format!("O-{submitted}")),
            side: Some(side),
            order_type: Some(if is_market {
                OrderType::Market
            } else {
                OrderType::Limit
            }),
            price: (!is_market).then(|| Price::from_u64(price_floor + rng.gen_range(0..price_steps))),
            qty: Some(Quantity::from_u64(rng.gen_range(1..=10))),
        });
    }

    batch
}
