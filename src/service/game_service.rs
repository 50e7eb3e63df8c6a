//! Game service: the session coordinator driving the relay protocol.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{ClientId, ClientRegistry, Game, GameEvent, GameId, GamePatch, GameStore};
use crate::error::RelayError;

/// Coordination layer for the quiz session protocol.
///
/// Owns references to the [`ClientRegistry`] for live connections and the
/// [`GameStore`] for game records. Every mutating operation follows the
/// pattern: check membership → acquire the per-game lock → mutate →
/// fan out through the registry → release the lock. Fan-out happens under
/// the per-game lock, so each member's outbound queue receives a game's
/// snapshots in mutation order. Locks nest game → registry, never the
/// inverse.
///
/// Requests from a connection the registry no longer knows are a normal
/// race with disconnect and are dropped quietly.
#[derive(Debug, Clone)]
pub struct GameService {
    registry: Arc<ClientRegistry>,
    store: Arc<GameStore>,
    code_attempts: u32,
}

impl GameService {
    /// Creates a new `GameService`.
    ///
    /// `code_attempts` bounds how many codes are drawn per `create_game`
    /// before allocation gives up.
    #[must_use]
    pub fn new(registry: Arc<ClientRegistry>, store: Arc<GameStore>, code_attempts: u32) -> Self {
        Self {
            registry,
            store,
            code_attempts,
        }
    }

    /// Returns a reference to the inner [`ClientRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<ClientRegistry> {
        &self.registry
    }

    /// Returns a reference to the inner [`GameStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<GameStore> {
        &self.store
    }

    /// Registers a freshly opened connection and returns its id.
    pub async fn connect(&self, tx: UnboundedSender<GameEvent>) -> ClientId {
        let client = self.registry.register(tx).await;
        tracing::info!(%client, "client connected");
        client
    }

    /// Handles `create_game`: allocates a game with the caller seated as
    /// host, binds the connection, and replies with the snapshot.
    ///
    /// No broadcast: nobody else can be in the game yet. Code-allocation
    /// exhaustion is logged and absorbed.
    pub async fn create_game(&self, client: ClientId, player_name: String) {
        if self.registry.get(client).await.is_none() {
            tracing::debug!(%client, "dropping create_game from unknown client");
            return;
        }

        let Some(game) = self.allocate_game(&player_name).await else {
            tracing::error!(
                %client,
                attempts = self.code_attempts,
                "could not allocate an unused game code"
            );
            return;
        };
        let game_id = game.game_id.clone();

        if !self.registry.bind(client, game_id.clone(), player_name, true).await {
            return;
        }
        tracing::info!(%client, game = %game_id, "game created");

        self.registry
            .send(client, GameEvent::GameCreated { game, is_host: true })
            .await;
    }

    /// Handles `join_game`: seats the caller as the second participant and
    /// broadcasts the updated snapshot to everyone in the game, the joiner
    /// included; that broadcast is how the host learns someone arrived.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::GameNotFound`] for an unknown code and
    /// [`RelayError::GameFull`] when both slots are taken; the game is left
    /// unchanged in both cases.
    pub async fn join_game(
        &self,
        client: ClientId,
        game_id: GameId,
        player_name: String,
    ) -> Result<(), RelayError> {
        if self.registry.get(client).await.is_none() {
            tracing::debug!(%client, "dropping join_game from unknown client");
            return Ok(());
        }

        let game_lock = self.store.get(&game_id).await?;
        let mut game = game_lock.write().await;
        if game.is_full() {
            return Err(RelayError::GameFull(game_id));
        }
        game.join(player_name.clone());
        let snapshot = game.clone();

        self.registry
            .bind(client, game_id.clone(), player_name, false)
            .await;
        tracing::info!(%client, game = %game_id, "player joined game");

        // fan out before releasing the per-game lock: members must receive
        // snapshots in mutation order
        self.registry
            .broadcast(&game_id, &GameEvent::GameUpdated { game: snapshot }, None)
            .await;
        drop(game);
        Ok(())
    }

    /// Handles `update_game`: merges the patch into the caller's game and
    /// broadcasts the full snapshot to all members, the caller included.
    ///
    /// Which fields mean what is a contract between the two clients; the
    /// coordinator merges and relays without validating. Callers without a
    /// bound game are ignored.
    pub async fn update_game(&self, client: ClientId, patch: GamePatch) {
        let Some(info) = self.registry.get(client).await else {
            tracing::debug!(%client, "dropping update_game from unknown client");
            return;
        };
        let Some(game_id) = info.game_id else {
            tracing::debug!(%client, "dropping update_game from unbound client");
            return;
        };
        let Ok(game_lock) = self.store.get(&game_id).await else {
            tracing::warn!(%client, game = %game_id, "dropping update_game for missing game");
            return;
        };

        let mut game = game_lock.write().await;
        game.apply(patch);
        let snapshot = game.clone();

        tracing::debug!(%client, game = %game_id, "game updated");

        // fan out before releasing the per-game lock: members must receive
        // snapshots in mutation order
        self.registry
            .broadcast(&game_id, &GameEvent::GameUpdated { game: snapshot }, None)
            .await;
        drop(game);
    }

    /// Handles `typing`: relays the flag to every other member of the
    /// caller's game. The sender is always excluded and nothing is
    /// persisted. Callers without a bound game are ignored.
    pub async fn typing(&self, client: ClientId, typing: bool) {
        let Some(info) = self.registry.get(client).await else {
            return;
        };
        let (Some(game_id), Some(player_name)) = (info.game_id, info.name) else {
            return;
        };

        self.registry
            .broadcast(
                &game_id,
                &GameEvent::PlayerTyping {
                    player_name,
                    typing,
                },
                Some(client),
            )
            .await;
    }

    /// Handles `ping`: replies `pong` to the caller only. No session
    /// requirement, no state change.
    pub async fn ping(&self, client: ClientId) {
        self.registry.send(client, GameEvent::Pong).await;
    }

    /// Handles a closed connection: notifies the remaining members of the
    /// caller's game, then drops the registry record.
    ///
    /// The game record is left intact; there is no session teardown.
    pub async fn disconnect(&self, client: ClientId) {
        let Some(info) = self.registry.get(client).await else {
            return;
        };

        if let (Some(game_id), Some(player_name)) = (info.game_id, info.name) {
            tracing::info!(%client, game = %game_id, player = %player_name, "client disconnected");
            self.registry
                .broadcast(
                    &game_id,
                    &GameEvent::PlayerDisconnected { player_name },
                    Some(client),
                )
                .await;
        } else {
            tracing::info!(%client, "client disconnected");
        }

        self.registry.remove(client).await;
    }

    /// Draws game codes until one inserts cleanly, up to the configured
    /// attempt bound. Returns the stored game's snapshot.
    async fn allocate_game(&self, host_name: &str) -> Option<Game> {
        for attempt in 0..self.code_attempts {
            let game = Game::new(GameId::generate(), host_name.to_string());
            let snapshot = game.clone();
            match self.store.insert(game).await {
                Ok(_) => return Some(snapshot),
                Err(err) => {
                    tracing::debug!(attempt, %err, "game code collision, re-rolling");
                }
            }
        }
        None
    }
}
