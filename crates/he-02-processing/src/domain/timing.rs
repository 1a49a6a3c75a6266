//! Processing-time aggregation.
//!
//! One sample per completed item, holding only the hash computation time
//! (the settle delay is excluded).

use he_01_item_store::ItemId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Aggregate view over recorded samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProcessingStats {
    /// Number of completed samples
    pub count: u64,
    /// Mean hash computation time in milliseconds (0.0 when `count == 0`)
    pub average_process_millis: f64,
}

/// Thread-safe map of `ItemId -> elapsed nanoseconds`.
#[derive(Debug, Default)]
pub struct TimingRecorder {
    samples: Mutex<HashMap<ItemId, u64>>,
}

impl TimingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the compute time for `id`.
    ///
    /// Returns `false` (and keeps the existing sample) if `id` was already recorded.
    pub fn record(&self, id: ItemId, elapsed: Duration) -> bool {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let mut samples = self.samples.lock();
        if samples.contains_key(&id) {
            return false;
        }
        samples.insert(id, nanos);
        true
    }

    /// Count and mean of all samples
    pub fn snapshot(&self) -> ProcessingStats {
        let (count, total_nanos) = {
            let samples = self.samples.lock();
            let total: u128 = samples.values().map(|&n| u128::from(n)).sum();
            (samples.len() as u64, total)
        };

        if count == 0 {
            return ProcessingStats::default();
        }

        ProcessingStats {
            count,
            average_process_millis: total_nanos as f64 / count as f64 / 1e6,
        }
    }
}
