//! Connection management for WebSocket clients.
//!
//! Tracks connected clients and the channel used to reach each one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use wyrdgrid_domain::PlayerId;
use wyrdgrid_protocol::ServerMessage;

use crate::game::runtime::StateSink;

/// Information about a connected client.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// Unique per socket; a reconnecting player gets a fresh one.
    pub connection_id: Uuid,
    pub player_id: PlayerId,
    pub connected_at: DateTime<Utc>,
}

/// Manages all active WebSocket connections.
pub struct ConnectionManager {
    /// Map of player_id -> (ConnectionInfo, sender channel)
    connections: RwLock<HashMap<PlayerId, (ConnectionInfo, mpsc::Sender<ServerMessage>)>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    ///
    /// A player id may hold only one socket at a time; a second
    /// registration for the same id is refused before any game-state
    /// mutation happens.
    pub async fn register(
        &self,
        player_id: PlayerId,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Result<ConnectionInfo, ConnectionError> {
        let mut connections = self.connections.write().await;
        if connections.contains_key(&player_id) {
            return Err(ConnectionError::AlreadyConnected { player_id });
        }
        let info = ConnectionInfo {
            connection_id: Uuid::new_v4(),
            player_id: player_id.clone(),
            connected_at: Utc::now(),
        };
        connections.insert(player_id, (info.clone(), sender));
        tracing::debug!(connection_id = %info.connection_id, "Connection registered");
        Ok(info)
    }

    /// Unregister a connection, but only if this socket still owns the
    /// slot. A handler cleaning up late must not evict a fresh socket
    /// that reused the player id.
    pub async fn unregister(&self, player_id: &PlayerId, connection_id: Uuid) {
        let mut connections = self.connections.write().await;
        let owns_slot = connections
            .get(player_id)
            .map(|(info, _)| info.connection_id == connection_id)
            .unwrap_or(false);
        if owns_slot {
            connections.remove(player_id);
            tracing::debug!(connection_id = %connection_id, "Connection unregistered");
        }
    }

    /// Get connection info for a player.
    pub async fn get(&self, player_id: &PlayerId) -> Option<ConnectionInfo> {
        let connections = self.connections.read().await;
        connections.get(player_id).map(|(info, _)| info.clone())
    }

    pub async fn count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a message to one client.
    pub async fn send_to(&self, player_id: &PlayerId, message: ServerMessage) {
        let connections = self.connections.read().await;
        if let Some((info, sender)) = connections.get(player_id) {
            if let Err(e) = sender.try_send(message) {
                tracing::warn!(
                    connection_id = %info.connection_id,
                    error = %e,
                    "Failed to send message"
                );
            }
        }
    }

    /// Broadcast a message to every connection.
    ///
    /// A full or closed channel is that client's problem alone; delivery
    /// to the rest continues.
    pub async fn broadcast(&self, message: ServerMessage) {
        let connections = self.connections.read().await;
        for (info, sender) in connections.values() {
            if let Err(e) = sender.try_send(message.clone()) {
                tracing::warn!(
                    connection_id = %info.connection_id,
                    error = %e,
                    "Failed to broadcast message"
                );
            }
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateSink for ConnectionManager {
    async fn deliver(&self, message: ServerMessage) {
        self.broadcast(message).await;
    }
}

/// Errors that can occur during connection operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConnectionError {
    #[error("player {player_id} already has an open connection")]
    AlreadyConnected { player_id: PlayerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> PlayerId {
        PlayerId::new(raw).expect("valid id")
    }

    #[tokio::test]
    async fn duplicate_registration_is_refused() {
        let manager = ConnectionManager::new();
        let (tx, _rx) = mpsc::channel(4);
        manager.register(id("alice"), tx.clone()).await.expect("first");

        let err = manager.register(id("alice"), tx).await;
        assert!(matches!(
            err,
            Err(ConnectionError::AlreadyConnected { .. })
        ));
        assert_eq!(manager.count().await, 1);
    }

    #[tokio::test]
    async fn stale_unregister_keeps_fresh_connection() {
        let manager = ConnectionManager::new();
        let (tx, _rx) = mpsc::channel(4);
        let old = manager.register(id("alice"), tx.clone()).await.expect("first");
        manager.unregister(&id("alice"), old.connection_id).await;

        let fresh = manager.register(id("alice"), tx).await.expect("reconnect");
        // the old handler cleaning up late must not evict the new socket
        manager.unregister(&id("alice"), old.connection_id).await;
        assert_eq!(manager.count().await, 1);
        assert_eq!(
            manager.get(&id("alice")).await.map(|i| i.connection_id),
            Some(fresh.connection_id)
        );
    }

    #[tokio::test]
    async fn broadcast_survives_a_full_channel() {
        let manager = ConnectionManager::new();
        let (dead_tx, _dead_rx) = mpsc::channel(1);
        dead_tx
            .try_send(ServerMessage::Pong)
            .expect("fill the channel");
        manager.register(id("stuck"), dead_tx).await.expect("register");

        let (tx, mut rx) = mpsc::channel(4);
        manager.register(id("bob"), tx).await.expect("register");

        manager.broadcast(ServerMessage::Pong).await;
        assert_eq!(rx.recv().await, Some(ServerMessage::Pong));
    }
}
