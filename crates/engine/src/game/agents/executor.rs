//! Applies the arbiter's chosen action to the state.

use wyrdgrid_domain::{DomainError, GameState, PlayerId};

use super::ProposedAction;

/// The player character's body: the only writer of player state.
#[derive(Debug, Default)]
pub struct BodyExecutor;

impl BodyExecutor {
    /// Apply `action` for `actor`, returning the outcome line for the
    /// event log. A refused action is an `Err`; the pipeline records it
    /// and the turn carries on.
    pub fn execute(
        &self,
        state: &mut GameState,
        actor: &PlayerId,
        action: &ProposedAction,
    ) -> Result<String, DomainError> {
        let player = state
            .player(actor)
            .ok_or_else(|| DomainError::not_found("Player", actor.as_str()))?;
        let name = player.name.clone();
        let pos = player.position;

        match action {
            ProposedAction::Move(dir) => {
                let target = state.grid.step(pos, *dir)?;
                state.grid.move_occupant(actor, pos, target)?;
                if let Some(p) = state.player_mut(actor) {
                    p.position = target;
                }
                Ok(format!("{name} walks {dir} to {target}."))
            }
            ProposedAction::Pickup { item } => {
                let taken = state
                    .grid
                    .take_item(pos, item)
                    .ok_or_else(|| DomainError::not_found("Item", item.clone()))?;
                let item_name = taken.name.clone();
                if let Some(p) = state.player_mut(actor) {
                    p.take_item(taken);
                }
                Ok(format!("{name} picks up the {item_name}."))
            }
            ProposedAction::Drop { item } => {
                let dropped = state
                    .player_mut(actor)
                    .and_then(|p| p.remove_item(item))
                    .ok_or_else(|| DomainError::not_found("Item", item.clone()))?;
                let item_name = dropped.name.clone();
                state.grid.drop_item(pos, dropped);
                Ok(format!("{name} drops the {item_name}."))
            }
            ProposedAction::Equip { slot, item } => {
                state
                    .player_mut(actor)
                    .ok_or_else(|| DomainError::not_found("Player", actor.as_str()))?
                    .equip(*slot, item)?;
                Ok(format!("{name} equips the {item} on their {slot}."))
            }
            ProposedAction::Say { words } => Ok(format!("{name} says: \"{words}\"")),
            ProposedAction::Observe => Ok(format!("{name} takes in the surroundings.")),
        }
    }
}
