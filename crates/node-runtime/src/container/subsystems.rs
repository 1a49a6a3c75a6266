//! # Subsystem Container
//!
//! Holds all core subsystem instances and manages their lifecycle.
//!
//! ## Initialization Order
//!
//! ```text
//! Level 0: Digest Generator, Item Store (no dependencies)
//! Level 1: Processing Service (depends on Level 0)
//! ```
//!
//! The HTTP gateway is built by [`crate::runtime::NodeRuntime`] on top of
//! this container, since it also needs the shutdown trigger.

use std::sync::Arc;

use he_01_item_store::{new_item_store, ItemStore};
use he_02_processing::{ProcessingError, ProcessingService};
use shared_crypto::{DigestError, DigestGenerator};
use tracing::{info, instrument, warn};

use crate::container::config::NodeConfig;

/// Startup failures while building subsystems
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Master secret rejected by the digest generator
    #[error("digest generator: {0}")]
    Digest(#[from] DigestError),

    /// Worker pool could not be started
    #[error("processing service: {0}")]
    Processing(#[from] ProcessingError),
}

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Configuration the subsystems were built from.
    pub config: NodeConfig,
    /// Keyed digest generator (Level 0).
    pub digest: Arc<DigestGenerator>,
    /// Item store (Level 0).
    pub store: Arc<dyn ItemStore>,
    /// Queue and worker pool (Level 1).
    pub processing: Arc<ProcessingService>,
}

impl SubsystemContainer {
    /// Build every subsystem in dependency order.
    ///
    /// Spawns the worker pool, so this must run inside a tokio runtime.
    #[instrument(skip_all, name = "container_init")]
    pub fn new(config: NodeConfig) -> Result<Self, ContainerError> {
        if config.uses_development_secret() {
            warn!("Using the built-in development secret; set HE_MASTER_SECRET in production");
        }

        // Level 0
        let digest = Arc::new(DigestGenerator::new(&config.security.master_secret)?);
        let store = new_item_store(&config.storage);

        // Level 1
        let processing = Arc::new(ProcessingService::start(
            config.processing.clone(),
            Arc::clone(&digest),
            Arc::clone(&store),
        )?);

        info!(
            workers = processing.worker_count(),
            backend = %config.storage.storage_type,
            "Subsystems initialized"
        );

        Ok(Self {
            config,
            digest,
            store,
            processing,
        })
    }
}
