//! Wyrdgrid Protocol - shared types for engine and client communication.
//!
//! This crate contains everything that crosses the WebSocket:
//! - Inbound commands (`PlayerCommand`)
//! - Outbound envelopes (`ServerMessage`)
//! - State snapshot DTOs (`GameStateDto` and friends)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde only
//! 2. **No business logic** - pure data types and serialization
//! 3. **No domain types** - ids are plain strings in DTOs; the engine
//!    owns the mapping from domain state to these views

pub mod dto;
pub mod messages;

pub use dto::{BodyPartsDto, GameStateDto, ItemDto, PlayerDto, TileDto};
pub use messages::{PlayerCommand, ServerMessage};
