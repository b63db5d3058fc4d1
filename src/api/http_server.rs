// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::{embeddings_handler, handlers::health_handler, liveness_handler, match_handler};
use crate::config::ServiceConfig;
use crate::embeddings::{FaceEmbedder, RandomEmbedder};
use crate::liveness::{ByteLengthHeuristic, LivenessDetector};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub face_embedder: Arc<dyn FaceEmbedder>,
    pub liveness_detector: Arc<dyn LivenessDetector>,
}

impl AppState {
    /// State backed by the placeholder engines
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_engines(
            config,
            Arc::new(RandomEmbedder::new()),
            Arc::new(ByteLengthHeuristic::new()),
        )
    }

    pub fn with_engines(
        config: ServiceConfig,
        face_embedder: Arc<dyn FaceEmbedder>,
        liveness_detector: Arc<dyn LivenessDetector>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            face_embedder,
            liveness_detector,
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(ServiceConfig::new_for_test())
    }
}

/// Room left above `max_upload_bytes` for multipart boundaries, part headers
/// and small form fields. The file itself is capped in `read_upload`.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_app(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    let multipart_limit =
        DefaultBodyLimit::max(upload_limit.saturating_add(MULTIPART_OVERHEAD_BYTES));

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Placeholder inference endpoints
        .route(
            "/api/embeddings",
            post(embeddings_handler).layer(multipart_limit),
        )
        .route("/api/liveness", post(liveness_handler).layer(multipart_limit))
        .route(
            "/api/match",
            post(match_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        "AI service listening on {} (embedder: {}, liveness: {})",
        addr,
        state.face_embedder.name(),
        state.liveness_detector.name()
    );

    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("AI service stopped");
    Ok(())
}

/// Binds the configured address and serves until Ctrl-C / SIGTERM.
pub async fn start_server(config: ServiceConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    serve(listener, AppState::new(config), shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
