//! Wyrdgrid domain model.
//!
//! Pure game state for the grid world: players, items, tiles, the event
//! log, and the `GameState` aggregate that ties them together. No I/O and
//! no protocol types live here; the engine owns both.

pub mod error;
pub mod events;
pub mod ids;
pub mod item;
pub mod player;
pub mod state;
pub mod world;

pub use error::DomainError;
pub use events::{EventLog, GameEvent};
pub use ids::{ItemId, PlayerId};
pub use item::{BodyParts, BodySlot, Item};
pub use player::Player;
pub use state::GameState;
pub use world::{Direction, GridPos, Tile, TileKind, WorldGrid};
