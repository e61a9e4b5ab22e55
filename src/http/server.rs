//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Compose route paths under the configured base path
//! - Wire up middleware (tracing, timeout, request ID, recovery)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::recovery::with_recovery;
use crate::http::request::MakeRequestUuidV4;
use crate::negotiation::Format;
use crate::routing::RouteGroup;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub base_path: Arc<str>,
    pub offered: Arc<[Format]>,
}

/// HTTP server for the API.
pub struct AppServer {
    router: Router,
}

impl AppServer {
    /// Create a new server with the given (validated) configuration.
    pub fn new(config: &ServerConfig) -> Self {
        let state = AppState {
            base_path: config.routes.base_path.as_str().into(),
            offered: config.negotiation.formats().into(),
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let api = RouteGroup::new(config.routes.base_path.as_str());
        let users = api
            .group("users")
            .route("/", post(handlers::create_user));
        let api = api
            .route("status", get(handlers::get_status))
            .merge(users);

        tracing::info!(base_path = %api.base_path(), "Routes registered");

        with_recovery(api.into_router())
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Router with every layer applied, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
