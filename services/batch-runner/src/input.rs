//! Command ingest
//!
//! Deserializes the finite ordered batch. A malformed file is an error
//! before the engine is ever constructed; individual command validity is the
//! engine's concern, not the parser's.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use types::command::CommandRecord;

/// Load a command batch from a JSON file
pub fn load_batch(path: &Path) -> Result<Vec<CommandRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading command file {}", path.display()))?;
    parse_batch(&raw).with_context(|| format!("parsing command file {}", path.display()))
}

/// Parse a serialized batch
pub fn parse_batch(raw: &str) -> Result<Vec<CommandRecord>> {
    Ok(serde_json::from_str(raw)?)
}
