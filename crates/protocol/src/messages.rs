//! WebSocket message types.
//!
//! Inbound frames are bare `PlayerCommand` objects; outbound frames are
//! `ServerMessage` envelopes of the form `{ "type": ..., "payload": ... }`.

use serde::{Deserialize, Serialize};

use crate::dto::GameStateDto;

/// A command sent by a client. `args` may be omitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// Messages from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state snapshot, sent after every state-changing operation.
    GameStateUpdate(GameStateDto),
    /// Something about this client's last frame was unacceptable. The
    /// connection stays open unless `code` says otherwise.
    Error { code: String, message: String },
    /// Heartbeat reply.
    Pong,
}
