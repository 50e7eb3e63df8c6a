//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming protocol messages and draining the connection's
//! outbound event channel.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use super::messages::ClientMessage;
use crate::domain::{ClientId, GameEvent};
use crate::service::GameService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// Registers the connection with the service, then selects over the socket
/// stream and the outbound channel until either side closes. Every exit
/// goes through the service's disconnect path.
pub async fn run_connection(socket: WebSocket, service: std::sync::Arc<GameService>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = service.connect(tx).await;

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        dispatch(&service, client, text.as_str()).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::warn!(%client, %err, "ws read error");
                        break;
                    }
                    _ => {}
                }
            }
            // Outbound event queued by the registry
            event = rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                let Ok(json) = serde_json::to_string(&event) else {
                    tracing::error!(%client, event = event.event_type_str(), "outbound event failed to encode");
                    continue;
                };
                if ws_tx.send(Message::text(json)).await.is_err() {
                    break;
                }
            }
        }
    }

    service.disconnect(client).await;
    tracing::debug!(%client, "ws connection closed");
}

/// Decodes one text frame and routes it to the service.
///
/// Malformed payloads are logged and dropped without a reply. Protocol
/// errors from `join_game` go back to the sender as an `error` event.
async fn dispatch(service: &GameService, client: ClientId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(%client, %err, "dropping malformed ws payload");
            return;
        }
    };

    match message {
        ClientMessage::CreateGame { player_name } => {
            service.create_game(client, player_name).await;
        }
        ClientMessage::JoinGame {
            game_id,
            player_name,
        } => {
            if let Err(err) = service.join_game(client, game_id, player_name).await {
                service.registry().send(client, GameEvent::from(&err)).await;
            }
        }
        ClientMessage::UpdateGame { updates } => {
            service.update_game(client, updates).await;
        }
        ClientMessage::Typing { typing } => {
            service.typing(client, typing).await;
        }
        ClientMessage::Ping => {
            service.ping(client).await;
        }
        ClientMessage::Unknown => {
            tracing::debug!(%client, "ignoring unrecognized message type");
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{ClientRegistry, GameStore};
    use tokio::sync::mpsc::UnboundedReceiver;

    fn make_service() -> GameService {
        GameService::new(Arc::new(ClientRegistry::new()), Arc::new(GameStore::new()), 16)
    }

    async fn connect_client(service: &GameService) -> (ClientId, UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = service.connect(tx).await;
        (client, rx)
    }

    #[tokio::test]
    async fn create_game_frame_yields_game_created_reply() {
        let service = make_service();
        let (client, mut rx) = connect_client(&service).await;

        dispatch(&service, client, r#"{"type":"create_game","playerName":"Alice"}"#).await;

        let Ok(GameEvent::GameCreated { game, is_host }) = rx.try_recv() else {
            panic!("expected game_created reply");
        };
        assert!(is_host);
        assert_eq!(game.player1_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn join_unknown_game_yields_error_reply() {
        let service = make_service();
        let (client, mut rx) = connect_client(&service).await;

        dispatch(
            &service,
            client,
            r#"{"type":"join_game","gameId":"ZZ99ZZ","playerName":"Bob"}"#,
        )
        .await;

        let Ok(GameEvent::Error { message }) = rx.try_recv() else {
            panic!("expected error reply");
        };
        assert_eq!(message, "Game not found");
    }

    #[tokio::test]
    async fn malformed_payload_gets_no_reply() {
        let service = make_service();
        let (client, mut rx) = connect_client(&service).await;

        dispatch(&service, client, "not json at all").await;
        dispatch(&service, client, r#"{"type":"join_game"}"#).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unrecognized_type_gets_no_reply() {
        let service = make_service();
        let (client, mut rx) = connect_client(&service).await;

        dispatch(&service, client, r#"{"type":"reveal_answers"}"#).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn ping_frame_yields_pong() {
        let service = make_service();
        let (client, mut rx) = connect_client(&service).await;

        dispatch(&service, client, r#"{"type":"ping"}"#).await;
        assert!(matches!(rx.try_recv(), Ok(GameEvent::Pong)));
    }
}
