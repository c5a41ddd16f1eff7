//! Router assembly

use super::handlers::{ask, ask_get, health, metrics, AppState};
use super::page::index;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies larger than this are rejected outright
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api/v1/ask", post(ask).get(ask_get))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
