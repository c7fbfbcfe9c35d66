//! WebSocket handling for player connections.
//!
//! One socket per player, upgraded at `/ws/{client_id}`. The handler
//! never touches game state directly; everything goes through the
//! `GameHandle` queue so turns apply in arrival order.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use tokio::sync::mpsc;

use wyrdgrid_domain::PlayerId;
use wyrdgrid_protocol::{PlayerCommand, ServerMessage};

use super::connections::{ConnectionError, ConnectionManager};
use crate::game::runtime::GameHandle;

/// Buffer size for per-connection message channel.
const CONNECTION_CHANNEL_BUFFER: usize = 256;

/// Combined state for WebSocket handlers.
pub struct WsState {
    pub game: GameHandle,
    pub connections: Arc<ConnectionManager>,
}

/// WebSocket upgrade handler - entry point for new connections.
pub async fn ws_handler(
    Path(client_id): Path<String>,
    ws: WebSocketUpgrade,
    State(state): State<Arc<WsState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, client_id))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<WsState>, client_id: String) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let player_id = match PlayerId::new(client_id) {
        Ok(id) => id,
        Err(err) => {
            let _ = send_direct(
                &mut ws_sender,
                &ServerMessage::Error {
                    code: "INVALID_CLIENT_ID".to_string(),
                    message: err.to_string(),
                },
            )
            .await;
            return;
        }
    };

    // Create a bounded channel for sending messages to this client
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(CONNECTION_CHANNEL_BUFFER);

    let info = match state.connections.register(player_id.clone(), tx.clone()).await {
        Ok(info) => info,
        Err(err @ ConnectionError::AlreadyConnected { .. }) => {
            tracing::warn!(player_id = %player_id, "Refusing duplicate connection");
            let _ = send_direct(
                &mut ws_sender,
                &ServerMessage::Error {
                    code: "ALREADY_CONNECTED".to_string(),
                    message: err.to_string(),
                },
            )
            .await;
            return;
        }
    };

    tracing::info!(
        connection_id = %info.connection_id,
        player_id = %player_id,
        "WebSocket connection established"
    );

    if state.game.join(player_id.clone()).await.is_err() {
        state
            .connections
            .unregister(&player_id, info.connection_id)
            .await;
        return;
    }

    // Spawn a task to forward messages from the channel to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Ok(json) = serde_json::to_string(&msg) {
                if ws_sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        }
    });

    // Handle incoming messages
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                match serde_json::from_str::<PlayerCommand>(&text) {
                    Ok(command) => {
                        if state.game.command(player_id.clone(), command).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(
                            player_id = %player_id,
                            error = %err,
                            "Failed to parse command"
                        );
                        let _ = tx.try_send(ServerMessage::Error {
                            code: "PARSE_ERROR".to_string(),
                            message: format!("Invalid command payload: {err}"),
                        });
                    }
                }
            }
            Ok(Message::Ping(_)) => {
                let _ = tx.try_send(ServerMessage::Pong);
            }
            Ok(Message::Close(_)) => {
                tracing::info!(player_id = %player_id, "WebSocket closed by client");
                break;
            }
            Err(err) => {
                tracing::error!(player_id = %player_id, error = %err, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    // Clean up
    state
        .connections
        .unregister(&player_id, info.connection_id)
        .await;
    if state.game.leave(player_id.clone()).await.is_err() {
        tracing::warn!(player_id = %player_id, "Game task gone during disconnect");
    }
    send_task.abort();

    tracing::info!(
        connection_id = %info.connection_id,
        player_id = %player_id,
        "WebSocket connection terminated"
    );
}

/// Send one message on a socket that has no channel yet (pre-register
/// refusals).
async fn send_direct(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).unwrap_or_default();
    sender.send(Message::Text(json.into())).await
}
