//! Processing configuration with validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::ProcessingError;

/// Worker pool and delay policy configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of workers consuming the queue
    pub worker_count: usize,
    /// Queue capacity; `None` sizes the queue to `worker_count`
    pub queue_capacity: Option<usize>,
    /// Settle time before each item is hashed, in seconds
    pub write_delay_secs: f64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            queue_capacity: None,
            write_delay_secs: 5.0,
        }
    }
}

impl ProcessingConfig {
    /// Config with explicit worker count and delay; queue sized to the pool.
    pub fn new(worker_count: usize, write_delay: Duration) -> Self {
        Self {
            worker_count,
            queue_capacity: None,
            write_delay_secs: write_delay.as_secs_f64(),
        }
    }

    /// Override the queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Effective queue capacity
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(self.worker_count)
    }

    /// Delay applied before each item is hashed
    pub fn write_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.write_delay_secs).unwrap_or(Duration::ZERO)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ProcessingError> {
        if self.worker_count == 0 {
            return Err(ProcessingError::InvalidConfig(
                "worker_count cannot be 0".into(),
            ));
        }

        if self.queue_capacity() == 0 {
            return Err(ProcessingError::InvalidConfig(
                "queue_capacity cannot be 0".into(),
            ));
        }

        if Duration::try_from_secs_f64(self.write_delay_secs).is_err() {
            return Err(ProcessingError::InvalidConfig(format!(
                "write_delay_secs must be a non-negative number, got {}",
                self.write_delay_secs
            )));
        }

        Ok(())
    }
}
