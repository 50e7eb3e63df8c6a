//! WebSocket layer: connection handling and protocol dispatch.
//!
//! The WebSocket endpoint at `/ws` is the relay's main surface: clients
//! create or join games through it and receive every event concerning
//! their session on it.

pub mod connection;
pub mod handler;
pub mod messages;
