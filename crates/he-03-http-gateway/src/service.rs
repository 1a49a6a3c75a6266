//! HTTP Gateway service - router construction and the serve loop.

use axum::routing::{get, post};
use axum::Router;
use he_02_processing::HashProcessingApi;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::handlers::{
    create_hash, get_hash, get_stats, method_not_allowed, not_found, request_shutdown,
    GatewayState,
};
use crate::middleware::TracingLayer;
use crate::shutdown::ShutdownTrigger;

/// HTTP boundary in front of the processing service
pub struct HashGatewayService {
    config: GatewayConfig,
    state: GatewayState,
}

impl HashGatewayService {
    /// Create a new gateway
    pub fn new(
        config: GatewayConfig,
        processing: Arc<dyn HashProcessingApi>,
        shutdown: ShutdownTrigger,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            state: GatewayState {
                processing,
                shutdown,
            },
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/hash", post(create_hash).fallback(method_not_allowed))
            .route("/hash/:id", get(get_hash).fallback(method_not_allowed))
            .route("/stats", get(get_stats).fallback(method_not_allowed))
            .route(
                "/shutdown",
                post(request_shutdown).fallback(method_not_allowed),
            )
            .fallback(not_found)
            .layer(RequestBodyLimitLayer::new(self.config.max_request_size))
            .layer(TracingLayer::new())
            .with_state(self.state.clone())
    }

    /// Bind the configured address
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.config.bind_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))
    }

    /// Serve on `listener` until `shutdown` resolves.
    ///
    /// Once `shutdown` resolves the listener stops accepting; in-flight
    /// requests get the configured grace period before the serve loop
    /// returns regardless.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(addr = %local, "[he-03] Starting HTTP server");

        let (draining_tx, draining_rx) = oneshot::channel::<()>();
        let signal = async move {
            shutdown.await;
            let _ = draining_tx.send(());
        };

        let server = axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .into_future();
        tokio::pin!(server);

        let grace = self.config.shutdown_grace();
        let grace_elapsed = async move {
            match draining_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                // Server finished on its own; the select below already has its result.
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = &mut server => {
                result.map_err(|e| GatewayError::Serve(e.to_string()))?;
                info!("[he-03] HTTP server closed");
            }
            _ = grace_elapsed => {
                warn!(
                    grace_secs = grace.as_secs(),
                    "[he-03] Grace period elapsed, dropping open connections"
                );
            }
        }

        Ok(())
    }
}
