//! Short shareable game code.
//!
//! [`GameId`] identifies one game session. Unlike connection ids these are
//! typed by humans, so they stay short and upper-case instead of being UUIDs.

use std::fmt;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Alphabet game codes are drawn from.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated game code.
const CODE_LEN: usize = 6;

/// Identifier of one game session: a short human-shareable code.
///
/// Generated codes are [`CODE_LEN`] characters from `A-Z0-9`. Codes arriving
/// from clients are carried as-is; an unknown code simply fails the lookup.
/// Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Draws a fresh random code.
    ///
    /// Uniqueness among live games is the store's concern, not this
    /// function's: callers re-roll on collision.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let code = (0..CODE_LEN)
            // choose returns None only for an empty slice
            .map(|_| char::from(CODE_ALPHABET.choose(&mut rng).copied().unwrap_or(b'A')))
            .collect();
        Self(code)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GameId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for GameId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}
