//! # quiz-relay
//!
//! WebSocket relay and session coordinator for two-player real-time quiz
//! matches.
//!
//! Clients open a persistent WebSocket, create or join a game identified by a
//! short shareable code, and exchange state through the relay: every accepted
//! mutation is broadcast to all connections bound to the game, and ephemeral
//! signals (typing, leaving) are fanned out to the other participant. All
//! state is in-memory and lives only as long as the process. This service is
//! a coordination layer, not a rules engine.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── GameService (service/)
//!     │
//!     ├── ClientRegistry (domain/)
//!     └── GameStore (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
