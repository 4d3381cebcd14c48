//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{routing::get, Router};
use flightclaim_sdk::ClaimAssistant;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(assistant: Arc<ClaimAssistant>) -> Router {
    let state = AppState { assistant };

    Router::new()
        .route("/health", get(health))
        .route("/compensation", get(compensation))
        .route("/cancellation-reason", get(cancellation_reason))
        .route("/flight-stats", get(flight_stats))
        .route("/flight-details", get(flight_details))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
