//! The per-turn decision makers.
//!
//! Each agent contributes one stage of the turn pipeline: personalities
//! propose, the arbiter chooses, the executor applies, the storyteller
//! narrates, the world keeper closes the turn.

pub mod arbiter;
pub mod executor;
pub mod personality;
pub mod storyteller;
pub mod world;

pub use arbiter::{Arbiter, WeightedArbiter};
pub use executor::BodyExecutor;
pub use personality::{PersonalityAgent, Temperament};
pub use storyteller::Storyteller;
pub use world::WorldKeeper;

use std::fmt;

use wyrdgrid_domain::{BodySlot, Direction};

/// An action one of the voices wants the player to take this turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ProposedAction {
    Move(Direction),
    Pickup { item: String },
    Drop { item: String },
    Equip { slot: BodySlot, item: String },
    Say { words: String },
    /// Take in the surroundings without changing anything.
    Observe,
}

impl fmt::Display for ProposedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(dir) => write!(f, "move {dir}"),
            Self::Pickup { item } => write!(f, "pick up the {item}"),
            Self::Drop { item } => write!(f, "drop the {item}"),
            Self::Equip { slot, item } => write!(f, "equip the {item} on the {slot}"),
            Self::Say { words } => write!(f, "say \"{words}\""),
            Self::Observe => f.write_str("observe the surroundings"),
        }
    }
}

/// One voice's contribution to a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Intention {
    /// Which voice spoke, e.g. "brave and reckless".
    pub voice: String,
    pub action: ProposedAction,
    /// The line that lands in the event log.
    pub rationale: String,
    /// How strongly the voice wants this, 0-10.
    pub weight: u8,
}
