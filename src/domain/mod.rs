//! Domain layer: core types, connection registry, and game storage.
//!
//! This module contains the server-side domain model including connection
//! and game identity, the game record with its typed patch, the outbound
//! event vocabulary, the registry of live connections, and the store of
//! live games.

pub mod client_id;
pub mod event;
pub mod game;
pub mod game_id;
pub mod game_store;
pub mod registry;

pub use client_id::ClientId;
pub use event::GameEvent;
pub use game::{Game, GamePatch, Scores};
pub use game_id::GameId;
pub use game_store::GameStore;
pub use registry::{ClientInfo, ClientRegistry};
