//! Wire-format views of the game state.
//!
//! Plain data mirrors of the domain types, with ids flattened to strings.
//! The engine builds these from its owned state; clients never see the
//! domain structs themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub name: String,
    pub description: String,
    pub svg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyPartsDto {
    pub hands: Option<ItemDto>,
    pub feet: Option<ItemDto>,
    pub body: Option<ItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    /// `[x, y]` grid coordinate.
    pub position: (u32, u32),
    pub body_parts: BodyPartsDto,
    pub inventory: Vec<ItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDto {
    /// Terrain kind, lowercase ("grass", "water", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub svg: String,
    /// Ids of the players standing on this tile.
    pub entities: Vec<String>,
    pub items: Vec<ItemDto>,
}

/// The full snapshot broadcast after every state change.
///
/// `players` is ordered so repeated snapshots serialize identically,
/// which keeps client-side diffing and test assertions simple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateDto {
    pub grid: Vec<Vec<TileDto>>,
    pub players: BTreeMap<String, PlayerDto>,
    pub event_log: Vec<String>,
    pub turn: u64,
}
