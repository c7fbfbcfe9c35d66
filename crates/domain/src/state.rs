//! The aggregate game state.
//!
//! Owned by exactly one task at runtime; nothing here is synchronized.
//! All mutation goes through the methods below so the event log always
//! reflects what happened.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::EventLog;
use crate::ids::PlayerId;
use crate::player::Player;
use crate::world::WorldGrid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: WorldGrid,
    pub players: HashMap<PlayerId, Player>,
    pub events: EventLog,
    pub turn: u64,
}

impl GameState {
    pub fn new(grid: WorldGrid, log_capacity: usize) -> Self {
        let mut events = EventLog::new(log_capacity);
        events.record("Welcome to Wyrdgrid!");
        Self {
            grid,
            players: HashMap::new(),
            events,
            turn: 0,
        }
    }

    /// Add a player at the spawn tile and record the join.
    ///
    /// Rejects ids already in the game; the caller decides what to tell
    /// the duplicate connection.
    pub fn join(&mut self, id: PlayerId) -> Result<&Player, DomainError> {
        if self.players.contains_key(&id) {
            return Err(DomainError::constraint(format!(
                "player {id} is already in the game"
            )));
        }
        let spawn = self
            .grid
            .spawn_position()
            .ok_or_else(|| DomainError::constraint("world has no passable tile to spawn on"))?;

        let player = Player::new(id.clone(), spawn);
        self.grid.place_occupant(spawn, id.clone());
        self.events
            .record(format!("{} has joined the game.", player.name));
        self.players.insert(id.clone(), player);
        self.players
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Player", id.as_str()))
    }

    /// Remove a player and record the leave. Unknown ids are a no-op so a
    /// disconnect that races a failed join cannot fault.
    pub fn leave(&mut self, id: &PlayerId) -> Option<Player> {
        let player = self.players.remove(id)?;
        self.grid.remove_occupant(id);
        self.events
            .record(format!("{} has left the game.", player.name));
        Some(player)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    pub fn record(&mut self, text: impl Into<String>) {
        self.events.record(text);
    }
}
