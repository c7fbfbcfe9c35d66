//! The game runtime: command vocabulary, the per-turn agents, the
//! serializing game task, and world art.

pub mod agents;
pub mod command;
pub mod runtime;
pub mod svg;
pub mod turn;

pub use command::Command;
pub use runtime::{GameHandle, StateSink};
pub use turn::TurnPipeline;
