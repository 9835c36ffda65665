//! HTTP surface for summaries.

pub mod api;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analysis::WrappedPipeline;
use crate::error::Result;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: WrappedPipeline,
}

impl AppState {
    pub fn new(pipeline: WrappedPipeline) -> Self {
        Self { pipeline }
    }
}

/// Start the server and run until the listener fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/github/:username", get(api::get_wrapped))
        .route("/health", get(api::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
