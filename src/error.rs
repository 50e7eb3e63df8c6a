//! Relay error types with wire message mapping.
//!
//! [`RelayError`] is the central error type for the relay. The `Display`
//! string of each protocol variant is exactly the message clients receive
//! in an `error` reply, so these strings are part of the wire contract.

use crate::domain::{GameEvent, GameId};

/// Server-side error enum.
///
/// Protocol errors (`GameNotFound`, `GameFull`) are surfaced to the
/// offending connection as an `error` event via the [`GameEvent`]
/// conversion. Everything else stays internal: logged and absorbed.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Game with the given code was not found.
    #[error("Game not found")]
    GameNotFound(GameId),

    /// Game already has two participants.
    #[error("Game is full")]
    GameFull(GameId),

    /// Freshly drawn game code collided with a live game.
    #[error("game code already in use: {0}")]
    GameIdTaken(GameId),
}

impl From<&RelayError> for GameEvent {
    fn from(err: &RelayError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn protocol_variants_display_wire_messages() {
        let id = GameId::from("AB12CD");
        assert_eq!(RelayError::GameNotFound(id.clone()).to_string(), "Game not found");
        assert_eq!(RelayError::GameFull(id).to_string(), "Game is full");
    }

    #[test]
    fn converts_to_error_event() {
        let err = RelayError::GameNotFound(GameId::from("XYZXYZ"));
        let event = GameEvent::from(&err);
        let GameEvent::Error { message } = event else {
            panic!("expected error event, got {event:?}");
        };
        assert_eq!(message, "Game not found");
    }
}
