//! Concurrent game storage with per-game fine-grained locking.
//!
//! [`GameStore`] keeps all live games in a `HashMap` where each record is
//! individually protected by a [`tokio::sync::RwLock`]. Mutations of the
//! same game are serialized while different games proceed concurrently.
//!
//! There is no remove operation: game records outlive their participants
//! and are only reclaimed when the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::GameId;
use super::game::Game;
use crate::error::RelayError;

/// Central store for all live games.
///
/// Uses a `RwLock<HashMap<...>>` for the outer map and per-record
/// `Arc<RwLock<Game>>` for fine-grained per-game locking.
#[derive(Debug)]
pub struct GameStore {
    games: RwLock<HashMap<GameId, Arc<RwLock<Game>>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new game into the store.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::GameIdTaken`] if a game with the same code is
    /// already live; callers re-roll the code and retry.
    pub async fn insert(&self, game: Game) -> Result<GameId, RelayError> {
        let game_id = game.game_id.clone();
        let mut map = self.games.write().await;
        if map.contains_key(&game_id) {
            return Err(RelayError::GameIdTaken(game_id));
        }
        map.insert(game_id.clone(), Arc::new(RwLock::new(game)));
        Ok(game_id)
    }

    /// Returns a shared handle to the game behind its per-game lock.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::GameNotFound`] if no game with the given code
    /// exists.
    pub async fn get(&self, game_id: &GameId) -> Result<Arc<RwLock<Game>>, RelayError> {
        let map = self.games.read().await;
        map.get(game_id)
            .cloned()
            .ok_or_else(|| RelayError::GameNotFound(game_id.clone()))
    }

    /// Returns the number of live games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Returns `true` if the store contains no games.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
