//! Shutdown signalling between the HTTP boundary and the process runtime.
//!
//! `POST /shutdown` and OS signals both fire the same [`ShutdownTrigger`];
//! the runtime awaits the matching [`ShutdownListener`] to start draining.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Create a linked trigger/listener pair.
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownListener) {
    let (tx, rx) = watch::channel(false);
    (
        ShutdownTrigger { tx: Arc::new(tx) },
        ShutdownListener { rx },
    )
}

/// Clonable, fire-once shutdown request
#[derive(Clone, Debug)]
pub struct ShutdownTrigger {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    /// Request shutdown. Later calls are no-ops.
    pub fn fire(&self, source: &str) {
        let already = self.tx.send_replace(true);
        if !already {
            info!(source, "[he-03] Shutdown requested");
        }
    }

    pub fn is_fired(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Awaitable side of the shutdown channel
#[derive(Clone, Debug)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once shutdown has been requested.
    ///
    /// Also resolves if every trigger has been dropped, since nothing can
    /// request shutdown any more.
    pub async fn wait(mut self) {
        // wait_for checks the current value first, so a trigger fired before
        // this call is still observed.
        let _ = self.rx.wait_for(|fired| *fired).await;
    }
}
