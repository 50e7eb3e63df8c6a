//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::GameService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session coordinator backing both the WebSocket and REST surfaces.
    pub service: Arc<GameService>,
}
