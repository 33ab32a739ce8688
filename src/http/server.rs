//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit)
//! - Inject the movie store into handlers
//! - Bind server to listener and stop on a shutdown signal

use axum::{
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

use crate::catalog::MovieStore;
use crate::config::AppConfig;
use crate::http::handlers::{create_movie, get_movie, list_movies, root, update_movie};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, trace_layer};
use crate::lifecycle::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MovieStore>,
}

/// HTTP server for the movie API.
pub struct MovieServer {
    router: Router,
}

impl MovieServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: AppConfig, store: Arc<MovieStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/movies", get(list_movies).post(create_movie))
            .route("/movies/{id}", get(get_movie).patch(update_movie))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.limits.request_timeout_secs)))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(propagate_request_id_layer())
            .layer(trace_layer())
            .layer(set_request_id_layer())
    }

    /// Run the server until Ctrl+C / SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
