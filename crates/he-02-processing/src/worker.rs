//! Worker loop.

use shared_crypto::DigestGenerator;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info};

use crate::domain::{TimingRecorder, WorkMessage, WorkUnit};

/// Receiving half of the work queue, shared by every worker in the pool.
pub(crate) type SharedQueue = Arc<Mutex<mpsc::Receiver<WorkMessage>>>;

pub(crate) struct Worker {
    pub(crate) index: usize,
    pub(crate) queue: SharedQueue,
    pub(crate) digest: Arc<DigestGenerator>,
    pub(crate) timings: Arc<TimingRecorder>,
    pub(crate) write_delay: Duration,
}

impl Worker {
    /// Consume units until a `Stop` arrives or the queue closes.
    pub(crate) async fn run(self) {
        info!(worker = self.index, "[he-02] Starting worker");

        loop {
            let message = {
                let mut queue = self.queue.lock().await;
                queue.recv().await
            };

            match message {
                Some(WorkMessage::Process(unit)) => self.process(unit).await,
                Some(WorkMessage::Stop) | None => break,
            }
        }

        info!(worker = self.index, "[he-02] Stopping worker");
    }

    async fn process(&self, unit: WorkUnit) {
        if !self.write_delay.is_zero() {
            tokio::time::sleep(self.write_delay).await;
        }

        let id = unit.id();
        let queued_for = unit.queued_at().elapsed();
        let (reservation, input) = unit.into_parts();

        let started = Instant::now();
        let digest = match self.digest.generate(&input) {
            Ok(digest) => digest,
            Err(e) => {
                error!(item_id = %id, worker = self.index, error = %e, "[he-02] Hashing failed, item left unpersisted");
                return;
            }
        };
        self.timings.record(id, started.elapsed());

        match reservation.persist(digest) {
            Ok(()) => {
                info!(item_id = %id, worker = self.index, "[he-02] Item written");
                debug!(item_id = %id, queued_ms = queued_for.as_millis() as u64, "[he-02] Item latency");
            }
            Err(e) => {
                error!(item_id = %id, worker = self.index, error = %e, "[he-02] Failed to persist item");
            }
        }
    }
}
