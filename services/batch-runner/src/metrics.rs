//! Latency instrumentation
//!
//! Per-command processing latency bucketed into a fixed histogram, reported
//! on stderr after the run. Instrumentation only; nothing here feeds back
//! into matching.

use std::time::Duration;

/// One histogram bucket: `lower_ns <= latency < upper_ns`
#[derive(Debug, Clone)]
pub struct LatencyBucket {
    pub label: &'static str,
    pub lower_ns: u64,
    pub upper_ns: u64,
    pub count: u64,
}

/// Fixed-bucket latency histogram
#[derive(Debug)]
pub struct LatencyHistogram {
    buckets: Vec<LatencyBucket>,
    total: u64,
}

impl LatencyHistogram {
    /// Create an empty histogram with the default buckets
    pub fn new() -> Self {
        Self {
            buckets: default_buckets(),
            total: 0,
        }
    }

    /// Record one command's processing time
    pub fn record(&mut self, elapsed: Duration) {
        let ns = elapsed.as_nanos() as u64;
        if let Some(bucket) = self.buckets.iter_mut().find(|b| ns < b.upper_ns) {
            bucket.count += 1;
        }
        self.total += 1;
    }

    /// The buckets, in ascending latency order
    pub fn buckets(&self) -> &[LatencyBucket] {
        &self.buckets
    }

    /// Total recorded samples
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

fn default_buckets() -> Vec<LatencyBucket> {
    vec![
        LatencyBucket { label: "<0.01ms", lower_ns: 0, upper_ns: 10_000, count: 0 },
        LatencyBucket { label: "0.01-0.05ms", lower_ns: 10_000, upper_ns: 50_000, count: 0 },
        LatencyBucket { label: "0.05-0.1ms", lower_ns: 50_000, upper_ns: 100_000, count: 0 },
        LatencyBucket { label: "0.1-0.2ms", lower_ns: 100_000, upper_ns: 200_000, count: 0 },
        LatencyBucket { label: "0.2-0.5ms", lower_ns: 200_000, upper_ns: 500_000, count: 0 },
        LatencyBucket { label: "0.5-1ms", lower_ns: 500_000, upper_ns: 1_000_000, count: 0 },
        LatencyBucket { label: "1-2ms", lower_ns: 1_000_000, upper_ns: 2_000_000, count: 0 },
        LatencyBucket { label: ">2ms", lower_ns: 2_000_000, upper_ns: u64::MAX, count: 0 },
    ]
}
