//! Queue messages.

use he_01_item_store::{ItemId, Reservation};
use std::fmt;
use std::time::Instant;

/// One submitted input on its way to a worker.
///
/// Consumed exactly once; the reservation inside completes the item.
pub struct WorkUnit {
    reservation: Reservation,
    input: String,
    queued_at: Instant,
}

impl WorkUnit {
    pub fn new(reservation: Reservation, input: String) -> Self {
        Self {
            reservation,
            input,
            queued_at: Instant::now(),
        }
    }

    /// Identifier this unit completes
    pub fn id(&self) -> ItemId {
        self.reservation.id()
    }

    /// When the unit entered the queue
    pub fn queued_at(&self) -> Instant {
        self.queued_at
    }

    /// Split into the completion handle and the raw input
    pub fn into_parts(self) -> (Reservation, String) {
        (self.reservation, self.input)
    }
}

impl fmt::Debug for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkUnit")
            .field("id", &self.id())
            .field("input", &"<redacted>")
            .finish()
    }
}

/// Entry on the work queue
#[derive(Debug)]
pub enum WorkMessage {
    /// Hash and persist this unit
    Process(WorkUnit),
    /// Drain signal: the receiving worker exits its loop
    Stop,
}
