//! Result emit
//!
//! Serializes the execution report. The report goes to stdout as pretty
//! JSON; any failure here exits non-zero.

use anyhow::{Context, Result};
use matching_engine::ExecutionReport;
use std::io::Write;

/// Write the report as pretty-printed JSON followed by a newline
pub fn write_report(report: &ExecutionReport, mut sink: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, report).context("serializing report")?;
    sink.write_all(b"\n").context("writing report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matching_engine::MatchingEngine;

    #[test]
    fn test_report_lands_in_sink() {
        let report = MatchingEngine::new().into_report();

        let mut sink = Vec::new();
        write_report(&report, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("\"trades\""));
        assert!(text.contains("\"orderBook\""));
        assert!(text.ends_with('\n'));
    }
}
