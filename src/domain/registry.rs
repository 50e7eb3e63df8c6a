//! Live connection registry with session-scoped broadcast.
//!
//! [`ClientRegistry`] tracks every open WebSocket connection together with
//! its outbound channel and session membership. Delivery is a synchronous
//! channel push drained by the connection's write loop, so neither sends
//! nor broadcasts ever block on a slow socket.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

use super::{ClientId, GameEvent, GameId};

/// One registered connection: outbound sender plus session-membership
/// metadata.
#[derive(Debug)]
struct ClientRecord {
    tx: UnboundedSender<GameEvent>,
    game_id: Option<GameId>,
    name: Option<String>,
    is_host: bool,
}

/// Snapshot of a connection's session membership, as returned by
/// [`ClientRegistry::get`].
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Game the connection is bound to, if any.
    pub game_id: Option<GameId>,
    /// Display name, set when the connection creates or joins a game.
    pub name: Option<String>,
    /// Whether this connection created its game.
    pub is_host: bool,
}

/// Central store of live connections.
///
/// A `RwLock<HashMap<...>>` keyed by [`ClientId`]. A lookup that comes up
/// empty is the normal outcome of racing a disconnect and is never treated
/// as an error by callers.
#[derive(Debug)]
pub struct ClientRegistry {
    clients: RwLock<HashMap<ClientId, ClientRecord>>,
}

impl ClientRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a connection's outbound sender and returns its fresh id.
    ///
    /// The record starts unbound: no game, no name, not a host.
    pub async fn register(&self, tx: UnboundedSender<GameEvent>) -> ClientId {
        let id = ClientId::new();
        let mut map = self.clients.write().await;
        map.insert(
            id,
            ClientRecord {
                tx,
                game_id: None,
                name: None,
                is_host: false,
            },
        );
        id
    }

    /// Returns a membership snapshot for a connection, or `None` when it is
    /// no longer registered.
    pub async fn get(&self, id: ClientId) -> Option<ClientInfo> {
        let map = self.clients.read().await;
        map.get(&id).map(|record| ClientInfo {
            game_id: record.game_id.clone(),
            name: record.name.clone(),
            is_host: record.is_host,
        })
    }

    /// Binds a connection to a game, setting game id, display name, and
    /// host flag together. Returns `false` when the connection is gone.
    pub async fn bind(&self, id: ClientId, game_id: GameId, name: String, is_host: bool) -> bool {
        let mut map = self.clients.write().await;
        let Some(record) = map.get_mut(&id) else {
            return false;
        };
        record.game_id = Some(game_id);
        record.name = Some(name);
        record.is_host = is_host;
        true
    }

    /// Removes a connection from the registry. Idempotent.
    pub async fn remove(&self, id: ClientId) {
        let mut map = self.clients.write().await;
        map.remove(&id);
    }

    /// Delivers one event to one connection.
    ///
    /// Returns `false` when the connection is unregistered or its channel
    /// is already closed; both cases are logged and absorbed.
    pub async fn send(&self, id: ClientId, event: GameEvent) -> bool {
        let map = self.clients.read().await;
        let Some(record) = map.get(&id) else {
            tracing::debug!(client = %id, event = event.event_type_str(), "dropping send to unknown client");
            return false;
        };
        if record.tx.send(event).is_err() {
            tracing::warn!(client = %id, "send failed, client channel closed");
            return false;
        }
        true
    }

    /// Fans an event out to every connection bound to `game_id`, skipping
    /// `exclude`.
    ///
    /// A failed delivery to one recipient is logged and never interrupts
    /// delivery to the rest. Returns the number of successful deliveries.
    pub async fn broadcast(
        &self,
        game_id: &GameId,
        event: &GameEvent,
        exclude: Option<ClientId>,
    ) -> usize {
        let map = self.clients.read().await;
        let mut delivered = 0;
        for (id, record) in map.iter() {
            if record.game_id.as_ref() != Some(game_id) || Some(*id) == exclude {
                continue;
            }
            if record.tx.send(event.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(
                    client = %id,
                    game = %game_id,
                    event = event.event_type_str(),
                    "broadcast delivery failed, client channel closed"
                );
            }
        }
        delivered
    }

    /// Returns the number of live connections.
    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Returns `true` if no connections are registered.
    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
