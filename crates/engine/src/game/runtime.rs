//! The serializing game task.
//!
//! All game state lives inside one spawned task. WebSocket handlers send
//! `GameCommand`s through a `GameHandle`; the task applies them strictly
//! in arrival order and pushes a full snapshot through the `StateSink`
//! after every one. No handler ever touches the state directly, so
//! commands from different clients cannot interleave mid-mutation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use wyrdgrid_domain::{GameState, PlayerId};
use wyrdgrid_protocol::{PlayerCommand, ServerMessage};

use crate::game::command::Command;
use crate::game::turn::TurnPipeline;
use crate::views::state_to_dto;

/// Queue depth for pending game commands.
const GAME_CHANNEL_BUFFER: usize = 1024;

/// Where snapshots go after each processed command.
#[async_trait]
pub trait StateSink: Send + Sync {
    async fn deliver(&self, message: ServerMessage);
}

/// A unit of work for the game task.
#[derive(Debug)]
pub enum GameCommand {
    Join(PlayerId),
    Leave(PlayerId),
    Player(PlayerId, PlayerCommand),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game task is no longer running")]
    Stopped,
}

/// Cheap clonable handle to the game task.
#[derive(Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<GameCommand>,
}

impl GameHandle {
    pub async fn join(&self, id: PlayerId) -> Result<(), GameError> {
        self.send(GameCommand::Join(id)).await
    }

    pub async fn leave(&self, id: PlayerId) -> Result<(), GameError> {
        self.send(GameCommand::Leave(id)).await
    }

    pub async fn command(&self, id: PlayerId, command: PlayerCommand) -> Result<(), GameError> {
        self.send(GameCommand::Player(id, command)).await
    }

    async fn send(&self, cmd: GameCommand) -> Result<(), GameError> {
        self.tx.send(cmd).await.map_err(|_| GameError::Stopped)
    }
}

/// Spawn the game task. The returned handle is the only way in.
pub fn spawn(mut state: GameState, pipeline: TurnPipeline, sink: Arc<dyn StateSink>) -> GameHandle {
    let (tx, mut rx) = mpsc::channel(GAME_CHANNEL_BUFFER);
    tokio::spawn(async move {
        while let Some(cmd) = rx.recv().await {
            apply(&mut state, &pipeline, cmd);
            sink.deliver(ServerMessage::GameStateUpdate(state_to_dto(&state)))
                .await;
        }
        tracing::info!("Game task shutting down");
    });
    GameHandle { tx }
}

/// Apply one command. Always leaves the state fit to broadcast.
fn apply(state: &mut GameState, pipeline: &TurnPipeline, cmd: GameCommand) {
    match cmd {
        GameCommand::Join(id) => match state.join(id.clone()) {
            Ok(player) => {
                tracing::info!(player_id = %id, name = %player.name, "Player joined");
            }
            Err(err) => {
                tracing::warn!(player_id = %id, error = %err, "Join refused");
            }
        },
        GameCommand::Leave(id) => {
            if state.leave(&id).is_some() {
                tracing::info!(player_id = %id, "Player left");
            }
        }
        GameCommand::Player(id, raw) => {
            let Some(name) = state.player(&id).map(|p| p.name.clone()) else {
                tracing::warn!(player_id = %id, "Command from unknown player");
                return;
            };
            state.record(format!("{name} commanded: {}", raw.command));
            let command = Command::parse(&raw);
            pipeline.run(state, &id, &command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;
    use tokio::time::{sleep, Duration};
    use wyrdgrid_domain::{Tile, TileKind, WorldGrid};
    use wyrdgrid_protocol::GameStateDto;

    struct RecordingSink {
        messages: Mutex<Vec<ServerMessage>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                messages: Mutex::new(Vec::new()),
            })
        }

        async fn wait_for(&self, count: usize) -> Vec<ServerMessage> {
            for _ in 0..200 {
                {
                    let messages = self.messages.lock().await;
                    if messages.len() >= count {
                        return messages.clone();
                    }
                }
                sleep(Duration::from_millis(5)).await;
            }
            panic!("timed out waiting for {count} broadcasts");
        }
    }

    #[async_trait]
    impl StateSink for RecordingSink {
        async fn deliver(&self, message: ServerMessage) {
            self.messages.lock().await.push(message);
        }
    }

    fn flat_state() -> GameState {
        let tiles = (0..4)
            .map(|_| {
                (0..4)
                    .map(|_| Tile::new(TileKind::Grass, "<svg/>"))
                    .collect()
            })
            .collect();
        GameState::new(
            WorldGrid {
                width: 4,
                height: 4,
                tiles,
            },
            64,
        )
    }

    fn id(raw: &str) -> PlayerId {
        PlayerId::new(raw).expect("valid id")
    }

    fn dto(message: &ServerMessage) -> &GameStateDto {
        match message {
            ServerMessage::GameStateUpdate(dto) => dto,
            other => panic!("expected a state update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_command_is_followed_by_a_broadcast() {
        let sink = RecordingSink::new();
        let handle = spawn(flat_state(), TurnPipeline::new(), sink.clone());

        handle.join(id("alice")).await.expect("join");
        handle
            .command(id("alice"), PlayerCommand::new("move", vec!["east".into()]))
            .await
            .expect("command");
        handle.leave(id("alice")).await.expect("leave");

        let messages = sink.wait_for(3).await;
        assert_eq!(messages.len(), 3);

        let after_join = dto(&messages[0]);
        assert!(after_join.players.contains_key("alice"));
        assert!(after_join
            .event_log
            .iter()
            .any(|l| l.contains("has joined the game.")));

        let after_move = dto(&messages[1]);
        let alice = &after_move.players["alice"];
        assert_eq!(alice.position, (1, 0));
        assert!(after_move
            .event_log
            .iter()
            .any(|l| l.contains("commanded: move")));

        let after_leave = dto(&messages[2]);
        assert!(after_leave.players.is_empty());
        assert!(after_leave
            .event_log
            .iter()
            .any(|l| l.contains("has left the game.")));
    }

    #[tokio::test]
    async fn an_unknown_command_still_broadcasts() {
        let sink = RecordingSink::new();
        let handle = spawn(flat_state(), TurnPipeline::new(), sink.clone());

        handle.join(id("alice")).await.expect("join");
        handle
            .command(id("alice"), PlayerCommand::new("dance", Vec::new()))
            .await
            .expect("command");

        let messages = sink.wait_for(2).await;
        let after = dto(&messages[1]);
        assert_eq!(after.players["alice"].position, (0, 0));
        assert_eq!(after.turn, 1);
    }

    #[tokio::test]
    async fn a_command_from_an_unknown_player_is_harmless() {
        let sink = RecordingSink::new();
        let handle = spawn(flat_state(), TurnPipeline::new(), sink.clone());

        handle
            .command(id("ghost"), PlayerCommand::new("move", vec!["east".into()]))
            .await
            .expect("command");

        let messages = sink.wait_for(1).await;
        let after = dto(&messages[0]);
        assert!(after.players.is_empty());
        assert_eq!(after.turn, 0);
    }

    #[tokio::test]
    async fn duplicate_join_does_not_duplicate_players() {
        let sink = RecordingSink::new();
        let handle = spawn(flat_state(), TurnPipeline::new(), sink.clone());

        handle.join(id("alice")).await.expect("join");
        handle.join(id("alice")).await.expect("second join");

        let messages = sink.wait_for(2).await;
        let after = dto(&messages[1]);
        assert_eq!(after.players.len(), 1);
        let joins = after
            .event_log
            .iter()
            .filter(|l| l.contains("has joined the game."))
            .count();
        assert_eq!(joins, 1);
    }
}
