//! # Node Runtime
//!
//! Wires the HTTP gateway on top of the subsystem container and runs the
//! process lifecycle.
//!
//! ## Shutdown Sequence
//!
//! Triggered by `POST /shutdown`, SIGINT or SIGTERM:
//!
//! 1. The listener stops accepting; in-flight requests get the grace period
//! 2. The processing service drains its queue and stops every worker
//! 3. `run` returns
//!
//! If the listener fails on its own, step 1 is skipped (no grace) and `run`
//! returns the error after draining.

use std::sync::Arc;

use anyhow::{Context, Result};
use he_02_processing::{HashProcessingApi, ProcessingService};
use he_03_http_gateway::{shutdown_channel, HashGatewayService, ShutdownListener, ShutdownTrigger};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::container::{NodeConfig, SubsystemContainer};

/// The main node runtime orchestrating all subsystems.
pub struct NodeRuntime {
    /// Subsystem container with all initialized services.
    container: SubsystemContainer,
    /// HTTP boundary.
    gateway: HashGatewayService,
    /// Fired by `/shutdown` and OS signals.
    shutdown_trigger: ShutdownTrigger,
    shutdown_listener: ShutdownListener,
}

impl NodeRuntime {
    /// Build all subsystems and the gateway.
    ///
    /// Must be called inside a tokio runtime; the worker pool starts here.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating hash encoder runtime");

        let gateway_config = config.server.clone();
        let container =
            SubsystemContainer::new(config).context("Failed to initialize subsystems")?;

        let (shutdown_trigger, shutdown_listener) = shutdown_channel();
        let processing: Arc<dyn HashProcessingApi> = container.processing.clone();
        let gateway = HashGatewayService::new(gateway_config, processing, shutdown_trigger.clone())
            .context("Failed to build HTTP gateway")?;

        Ok(Self {
            container,
            gateway,
            shutdown_trigger,
            shutdown_listener,
        })
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener> {
        self.gateway.bind().await.context("Failed to bind HTTP listener")
    }

    /// Serve until shutdown is requested, then drain.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        let signals = tokio::spawn(forward_os_signals(self.shutdown_trigger.clone()));

        info!(
            workers = self.container.processing.worker_count(),
            grace_secs = self.gateway.config().shutdown_grace_secs,
            "Hash encoder running"
        );

        let served = self
            .gateway
            .serve(listener, self.shutdown_listener.clone().wait())
            .await;
        if let Err(e) = &served {
            error!(error = %e, "HTTP server failed, shutting down without grace period");
        }

        info!("Draining processing service...");
        self.container.processing.terminate().await;
        signals.abort();

        info!("Shutdown complete");
        served.context("HTTP server failed")
    }

    /// Trigger graceful shutdown from outside the HTTP surface.
    pub fn shutdown_trigger(&self) -> ShutdownTrigger {
        self.shutdown_trigger.clone()
    }

    /// The processing service behind the gateway.
    pub fn processing(&self) -> Arc<ProcessingService> {
        Arc::clone(&self.container.processing)
    }
}

/// Fire `trigger` on the first SIGINT or SIGTERM.
async fn forward_os_signals(trigger: ShutdownTrigger) {
    let source = wait_for_signal().await;
    trigger.fire(source);
}

async fn wait_for_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
