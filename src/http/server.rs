//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the three relay routes
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl-C or an explicit signal

use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{RelayConfig, WebhookConfig};
use crate::http::handlers;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub webhook: WebhookConfig,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            upstream: UpstreamClient::new(&config.upstream.base_url),
            webhook: config.webhook.clone(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// `/webhook` and `/file` are static prefixes and win over the
    /// `/{token}/{method}` capture for paths under them.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/webhook/{encoded}", any(handlers::relay_webhook))
            .route("/file/{token}/{*path}", get(handlers::relay_file))
            .route("/{token}/{method}", any(handlers::relay_api))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wait for Ctrl-C or an explicit shutdown signal.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl-C received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
