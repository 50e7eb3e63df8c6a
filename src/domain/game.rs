//! Game session record and the typed partial patch applied to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GameId;

/// Score slots for the two participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Participant 1 (host) score.
    pub player1: i64,
    /// Participant 2 (joiner) score.
    pub player2: i64,
}

/// One quiz game between up to two participants.
///
/// The coordinator treats most of these fields as opaque client-driven
/// state: it writes them at creation and join, then only merges patches the
/// participants send. Serialized whole as the `game` snapshot in outbound
/// events, so field names here are wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Shareable code identifying the game (immutable after creation).
    pub game_id: GameId,

    /// Display name of participant 1, the creator/host.
    pub player1_name: Option<String>,

    /// Display name of participant 2, `None` until someone joins.
    pub player2_name: Option<String>,

    /// Question text currently in play.
    pub current_question: String,

    /// Counter advanced by the clients as they move through questions.
    pub question_number: u32,

    /// Participant 1's answer to the current question.
    pub player1_answer: String,

    /// Participant 2's answer to the current question.
    pub player2_answer: String,

    /// Whether the answers have been revealed to both participants.
    pub answers_revealed: bool,

    /// Phase tag. The coordinator writes `"waiting"` at creation and
    /// `"question"` on join; transitions are otherwise client-driven and
    /// never validated.
    pub game_phase: String,

    /// Score per participant slot.
    pub scores: Scores,

    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Creates a fresh game in the `"waiting"` phase with the given creator
    /// seated as participant 1.
    #[must_use]
    pub fn new(game_id: GameId, host_name: String) -> Self {
        let now = Utc::now();
        Self {
            game_id,
            player1_name: Some(host_name),
            player2_name: None,
            current_question: String::new(),
            question_number: 0,
            player1_answer: String::new(),
            player2_answer: String::new(),
            answers_revealed: false,
            game_phase: "waiting".to_string(),
            scores: Scores::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when both participant slots are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.player2_name.is_some()
    }

    /// Seats the second participant and moves the game into the
    /// `"question"` phase.
    pub fn join(&mut self, player_name: String) {
        self.player2_name = Some(player_name);
        self.game_phase = "question".to_string();
        self.touch();
    }

    /// Merges a partial update into the record: present patch fields
    /// overwrite, absent ones are retained, `scores` is replaced wholesale.
    /// Always refreshes `updated_at`.
    pub fn apply(&mut self, patch: GamePatch) {
        if let Some(current_question) = patch.current_question {
            self.current_question = current_question;
        }
        if let Some(question_number) = patch.question_number {
            self.question_number = question_number;
        }
        if let Some(player1_answer) = patch.player1_answer {
            self.player1_answer = player1_answer;
        }
        if let Some(player2_answer) = patch.player2_answer {
            self.player2_answer = player2_answer;
        }
        if let Some(answers_revealed) = patch.answers_revealed {
            self.answers_revealed = answers_revealed;
        }
        if let Some(game_phase) = patch.game_phase {
            self.game_phase = game_phase;
        }
        if let Some(scores) = patch.scores {
            self.scores = scores;
        }
        self.touch();
    }

    /// Refreshes `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Typed partial update accepted by `update_game`.
///
/// Field names match the snapshot keys, so clients echo back what they
/// read. Identity fields (code, participant names, timestamps) are not
/// patchable; unknown keys are dropped at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamePatch {
    /// New question text.
    pub current_question: Option<String>,
    /// New question counter value.
    pub question_number: Option<u32>,
    /// Participant 1's answer.
    pub player1_answer: Option<String>,
    /// Participant 2's answer.
    pub player2_answer: Option<String>,
    /// Reveal flag.
    pub answers_revealed: Option<bool>,
    /// New phase tag.
    pub game_phase: Option<String>,
    /// Replacement for both score slots.
    pub scores: Option<Scores>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game::new(GameId::from("AB12CD"), "Alice".to_string())
    }

    #[test]
    fn new_starts_waiting_with_creator_seated() {
        let game = sample_game();
        assert_eq!(game.player1_name.as_deref(), Some("Alice"));
        assert_eq!(game.player2_name, None);
        assert_eq!(game.game_phase, "waiting");
        assert_eq!(game.current_question, "");
        assert_eq!(game.question_number, 0);
        assert!(!game.answers_revealed);
        assert_eq!(game.scores, Scores::default());
        assert_eq!(game.created_at, game.updated_at);
        assert!(!game.is_full());
    }

    #[test]
    fn join_seats_second_player_and_advances_phase() {
        let mut game = sample_game();
        game.join("Bob".to_string());
        assert_eq!(game.player2_name.as_deref(), Some("Bob"));
        assert_eq!(game.game_phase, "question");
        assert!(game.is_full());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut game = sample_game();
        game.apply(GamePatch {
            current_question: Some("2+2?".to_string()),
            scores: Some(Scores {
                player1: 1,
                player2: 0,
            }),
            ..GamePatch::default()
        });
        assert_eq!(game.current_question, "2+2?");
        assert_eq!(game.scores.player1, 1);
        assert_eq!(game.scores.player2, 0);
        // untouched fields keep their values
        assert_eq!(game.question_number, 0);
        assert_eq!(game.player1_answer, "");
        assert_eq!(game.game_phase, "waiting");
        assert_eq!(game.player1_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn apply_refreshes_updated_at_only() {
        let mut game = sample_game();
        let created = game.created_at;
        let before = game.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        game.apply(GamePatch::default());
        assert!(game.updated_at > before);
        assert_eq!(game.created_at, created);
    }

    #[test]
    fn snapshot_serializes_with_fixed_keys() {
        let game = sample_game();
        let value = serde_json::to_value(&game).ok();
        let Some(serde_json::Value::Object(map)) = value else {
            panic!("snapshot did not serialize to an object");
        };
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "answers_revealed",
                "created_at",
                "current_question",
                "game_id",
                "game_phase",
                "player1_answer",
                "player1_name",
                "player2_answer",
                "player2_name",
                "question_number",
                "scores",
                "updated_at",
            ]
        );
        assert_eq!(map.get("game_id"), Some(&serde_json::json!("AB12CD")));
        assert_eq!(map.get("player2_name"), Some(&serde_json::Value::Null));
        assert!(
            map.get("created_at").is_some_and(serde_json::Value::is_string),
            "timestamps serialize as ISO-8601 strings"
        );
    }

    #[test]
    fn patch_decodes_snapshot_keys_and_drops_unknown_ones() {
        let json = r#"{"current_question":"2+2?","answers_revealed":true,"bogus":42}"#;
        let patch: Option<GamePatch> = serde_json::from_str(json).ok();
        let Some(patch) = patch else {
            panic!("patch failed to decode");
        };
        assert_eq!(patch.current_question.as_deref(), Some("2+2?"));
        assert_eq!(patch.answers_revealed, Some(true));
        assert_eq!(patch.question_number, None);
        assert!(patch.scores.is_none());
    }
}
