//! Outbound events sent to connected clients.
//!
//! Every message the relay pushes over a WebSocket is a [`GameEvent`],
//! serialized as JSON with a `type` discriminator. Reply events go to one
//! connection; broadcast events fan out to a game's members through the
//! [`super::ClientRegistry`].

use serde::Serialize;

use super::game::Game;

/// Outbound message, tagged by `type` on the wire.
///
/// Envelope fields serialize in camelCase (`isHost`, `playerName`); the
/// nested `game` snapshot keeps the snapshot's own snake_case keys.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GameEvent {
    /// Reply to a successful `create_game`, sent to the creator only.
    GameCreated {
        /// Full snapshot of the freshly created game.
        game: Game,
        /// True for the receiving connection, which created the game.
        is_host: bool,
    },

    /// Broadcast to all members of a game after a join or an update.
    GameUpdated {
        /// Full snapshot after the mutation.
        game: Game,
    },

    /// Broadcast to the other members while a participant types.
    PlayerTyping {
        /// Display name of the typing participant.
        player_name: String,
        /// Whether that participant is currently typing.
        typing: bool,
    },

    /// Broadcast to the remaining members when a participant's connection
    /// closes.
    PlayerDisconnected {
        /// Display name of the participant who left.
        player_name: String,
    },

    /// Reply carrying a protocol error message.
    Error {
        /// Human-readable message, e.g. `"Game not found"`.
        message: String,
    },

    /// Reply to a `ping`.
    Pong,
}

impl GameEvent {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::GameCreated { .. } => "game_created",
            Self::GameUpdated { .. } => "game_updated",
            Self::PlayerTyping { .. } => "player_typing",
            Self::PlayerDisconnected { .. } => "player_disconnected",
            Self::Error { .. } => "error",
            Self::Pong => "pong",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::GameId;

    #[test]
    fn game_created_envelope_is_camel_case() {
        let event = GameEvent::GameCreated {
            game: Game::new(GameId::from("AB12CD"), "Alice".to_string()),
            is_host: true,
        };
        let value = serde_json::to_value(&event).ok();
        let Some(value) = value else {
            panic!("serialization failed");
        };
        assert_eq!(value["type"], "game_created");
        assert_eq!(value["isHost"], true);
        // the nested snapshot keeps its own snake_case keys
        assert_eq!(value["game"]["game_id"], "AB12CD");
        assert_eq!(value["game"]["game_phase"], "waiting");
    }

    #[test]
    fn player_typing_serializes() {
        let event = GameEvent::PlayerTyping {
            player_name: "Alice".to_string(),
            typing: true,
        };
        let json = serde_json::to_string(&event);
        assert!(json.is_ok());
        let json_str = json.unwrap_or_default();
        assert!(json_str.contains("player_typing"));
        assert!(json_str.contains("playerName"));
    }

    #[test]
    fn pong_is_a_bare_tag() {
        let json = serde_json::to_string(&GameEvent::Pong).ok();
        assert_eq!(json.as_deref(), Some(r#"{"type":"pong"}"#));
    }

    #[test]
    fn event_type_accessor() {
        let event = GameEvent::PlayerDisconnected {
            player_name: "Bob".to_string(),
        };
        assert_eq!(event.event_type_str(), "player_disconnected");
        assert_eq!(GameEvent::Pong.event_type_str(), "pong");
    }
}
