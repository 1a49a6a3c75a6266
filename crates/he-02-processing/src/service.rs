//! Processing Service
//!
//! Owns the bounded work queue and the worker pool. Submissions reserve an
//! identifier up front, then wait for queue space; workers apply the write
//! delay, hash, record the timing and complete the reservation.

use async_trait::async_trait;
use he_01_item_store::{ItemId, ItemStore, Reservation};
use parking_lot::Mutex;
use shared_crypto::DigestGenerator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::{
    ProcessingConfig, ProcessingError, ProcessingStats, TimingRecorder, WorkMessage, WorkUnit,
};
use crate::ports::HashProcessingApi;
use crate::worker::Worker;

/// Queue plus worker pool.
///
/// Must be started from inside a tokio runtime.
pub struct ProcessingService {
    store: Arc<dyn ItemStore>,
    queue: mpsc::Sender<WorkMessage>,
    timings: Arc<TimingRecorder>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    worker_count: usize,
    terminated: AtomicBool,
}

impl ProcessingService {
    /// Validate `config` and spawn the worker pool.
    pub fn start(
        config: ProcessingConfig,
        digest: Arc<DigestGenerator>,
        store: Arc<dyn ItemStore>,
    ) -> Result<Self, ProcessingError> {
        config.validate()?;

        let worker_count = config.worker_count;
        let (queue, receiver) = mpsc::channel(config.queue_capacity());
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let timings = Arc::new(TimingRecorder::new());
        let write_delay = config.write_delay();

        let workers = (0..worker_count)
            .map(|index| {
                let worker = Worker {
                    index,
                    queue: Arc::clone(&receiver),
                    digest: Arc::clone(&digest),
                    timings: Arc::clone(&timings),
                    write_delay,
                };
                tokio::spawn(worker.run())
            })
            .collect();

        info!(
            workers = worker_count,
            queue_capacity = config.queue_capacity(),
            write_delay_ms = write_delay.as_millis() as u64,
            "[he-02] Processing service started"
        );

        Ok(Self {
            store,
            queue,
            timings,
            workers: Mutex::new(workers),
            worker_count,
            terminated: AtomicBool::new(false),
        })
    }

    /// Whether `terminate` has been called
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    /// Size of the worker pool
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }
}

#[async_trait]
impl HashProcessingApi for ProcessingService {
    async fn submit(&self, input: String) -> Result<ItemId, ProcessingError> {
        if self.is_terminated() {
            return Err(ProcessingError::ShuttingDown);
        }

        let reservation = Reservation::acquire(&self.store);
        let id = reservation.id();

        self.queue
            .send(WorkMessage::Process(WorkUnit::new(reservation, input)))
            .await
            .map_err(|_| {
                warn!(item_id = %id, "[he-02] Queue closed, submission dropped");
                ProcessingError::ShuttingDown
            })?;

        debug!(item_id = %id, "[he-02] Item queued");
        Ok(id)
    }

    fn retrieve(&self, id: ItemId) -> Result<String, ProcessingError> {
        Ok(self.store.get(id)?)
    }

    fn stats(&self) -> ProcessingStats {
        self.timings.snapshot()
    }

    async fn terminate(&self) {
        if self.terminated.swap(true, Ordering::AcqRel) {
            debug!("[he-02] Terminate already requested");
            return;
        }

        info!(workers = self.worker_count, "[he-02] Draining work queue");

        // Stops queue behind every pending unit, so pending work finishes first.
        for _ in 0..self.worker_count {
            if self.queue.send(WorkMessage::Stop).await.is_err() {
                break;
            }
        }

        let handles = std::mem::take(&mut *self.workers.lock());
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "[he-02] Worker task ended abnormally");
            }
        }

        info!("[he-02] Processing service terminated");
    }
}
