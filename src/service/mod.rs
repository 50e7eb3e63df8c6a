//! Service layer: session coordination.
//!
//! [`GameService`] drives the relay protocol, owning the
//! [`super::domain::ClientRegistry`] and [`super::domain::GameStore`] and
//! fanning events out to game members.

pub mod game_service;

pub use game_service::GameService;
