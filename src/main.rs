//! quiz-relay server entry point.
//!
//! Starts the Axum HTTP server with the WebSocket relay endpoint and the
//! system REST endpoints.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quiz_relay::api;
use quiz_relay::app_state::AppState;
use quiz_relay::config::RelayConfig;
use quiz_relay::domain::{ClientRegistry, GameStore};
use quiz_relay::service::GameService;
use quiz_relay::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting quiz-relay");

    // Build domain layer
    let registry = Arc::new(ClientRegistry::new());
    let store = Arc::new(GameStore::new());

    // Build service layer
    let service = Arc::new(GameService::new(registry, store, config.code_attempts));

    // Build application state
    let app_state = AppState { service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
