//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, access log, timeout)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::EchoConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::info::{EnvSnapshot, SystemInfo};
use crate::lifecycle::shutdown::recv_shutdown;
use crate::observability::access_log;

/// Application state injected into handlers.
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<EnvSnapshot>,
    pub system: Arc<SystemInfo>,
    pub body_limit: Option<usize>,
}

impl AppState {
    pub fn from_config(config: &EchoConfig) -> Self {
        Self {
            env: Arc::new(EnvSnapshot::capture(&config.exposure.env_vars)),
            system: Arc::new(SystemInfo::collect()),
            body_limit: config.limits.max_body_bytes,
        }
    }
}

/// HTTP server for the echo service.
pub struct HttpServer {
    router: Router,
    config: EchoConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server around prepared state.
    pub fn with_state(config: EchoConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EchoConfig, state: AppState) -> Router {
        Router::new()
            .route("/env", get(handlers::env))
            .route("/system", get(handlers::system))
            .route("/hi", get(handlers::hi))
            .route("/fail", any(handlers::fail))
            .route("/crash", any(handlers::crash))
            .fallback(handlers::echo)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(middleware::from_fn(access_log))
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = ?self.config.listener.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(recv_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }
}
