//! System endpoints: health check and relay statistics.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Relay statistics response.
#[derive(Debug, Serialize)]
struct StatsResponse {
    active_games: usize,
    connected_clients: usize,
    timestamp: String,
}

/// `GET /stats` — Current size of the in-memory tables.
///
/// Games are never garbage-collected, so `active_games` counts every game
/// created since the process started.
pub async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatsResponse {
            active_games: state.service.store().len().await,
            connected_clients: state.service.registry().len().await,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
}
