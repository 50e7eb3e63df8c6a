//! REST API layer: router composition for the system endpoints.
//!
//! The relay's HTTP surface is small: `/health` and `/stats` at the root.
//! Everything gameplay-related happens over the WebSocket in [`crate::ws`].

pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Builds the REST router.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(system::routes())
}
