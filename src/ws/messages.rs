//! Inbound WebSocket message types.

use serde::Deserialize;

use crate::domain::{GameId, GamePatch};

/// Messages a client can send over the WebSocket, tagged by `type`.
///
/// Envelope fields arrive in camelCase (`playerName`, `gameId`); the
/// `updates` payload of `update_game` carries the snapshot's own keys. A
/// payload whose `type` is unrecognized decodes to
/// [`ClientMessage::Unknown`] and is ignored by dispatch.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Start a new game with the sender seated as host.
    CreateGame {
        /// Display name the sender wants to use.
        player_name: String,
    },

    /// Join an existing game by code.
    JoinGame {
        /// Code of the game to join.
        game_id: GameId,
        /// Display name the sender wants to use.
        player_name: String,
    },

    /// Merge a partial update into the sender's game.
    UpdateGame {
        /// Fields to overwrite; everything absent is retained.
        updates: GamePatch,
    },

    /// Tell the other participant whether the sender is typing.
    Typing {
        /// Whether the sender is currently typing.
        typing: bool,
    },

    /// Liveness check, answered with `pong`.
    Ping,

    /// Any unrecognized message type. Dispatch ignores it.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ClientMessage {
        match serde_json::from_str(json) {
            Ok(message) => message,
            Err(err) => panic!("decode failed: {err}"),
        }
    }

    #[test]
    fn decodes_create_game() {
        let message = decode(r#"{"type":"create_game","playerName":"Alice"}"#);
        let ClientMessage::CreateGame { player_name } = message else {
            panic!("expected create_game, got {message:?}");
        };
        assert_eq!(player_name, "Alice");
    }

    #[test]
    fn decodes_join_game() {
        let message = decode(r#"{"type":"join_game","gameId":"AB12CD","playerName":"Bob"}"#);
        let ClientMessage::JoinGame {
            game_id,
            player_name,
        } = message
        else {
            panic!("expected join_game, got {message:?}");
        };
        assert_eq!(game_id, GameId::from("AB12CD"));
        assert_eq!(player_name, "Bob");
    }

    #[test]
    fn decodes_update_game_with_partial_updates() {
        let message =
            decode(r#"{"type":"update_game","updates":{"current_question":"2+2?"}}"#);
        let ClientMessage::UpdateGame { updates } = message else {
            panic!("expected update_game, got {message:?}");
        };
        assert_eq!(updates.current_question.as_deref(), Some("2+2?"));
        assert!(updates.game_phase.is_none());
    }

    #[test]
    fn decodes_typing_and_ping() {
        assert!(matches!(
            decode(r#"{"type":"typing","typing":false}"#),
            ClientMessage::Typing { typing: false }
        ));
        assert!(matches!(decode(r#"{"type":"ping"}"#), ClientMessage::Ping));
    }

    #[test]
    fn unrecognized_type_decodes_to_unknown() {
        let message = decode(r#"{"type":"reveal_answers","whatever":1}"#);
        assert!(matches!(message, ClientMessage::Unknown));
    }

    #[test]
    fn missing_fields_fail_to_decode() {
        let result: Result<ClientMessage, _> = serde_json::from_str(r#"{"type":"join_game"}"#);
        assert!(result.is_err());
    }
}
