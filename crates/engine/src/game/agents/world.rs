//! End-of-turn world upkeep.

use wyrdgrid_domain::GameState;

/// Advances the world clock after each turn and records an ambient event
/// now and then.
#[derive(Debug, Default)]
pub struct WorldKeeper;

impl WorldKeeper {
    const AMBIENT_EVERY: u64 = 10;

    /// Close the turn. Returns an ambient line when the world has
    /// something to say.
    pub fn tick(&self, state: &mut GameState) -> Option<String> {
        state.turn += 1;
        if state.turn % Self::AMBIENT_EVERY == 0 {
            Some(format!(
                "A low wind crosses the grid as turn {} closes.",
                state.turn
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrdgrid_domain::{Tile, TileKind, WorldGrid};

    fn state() -> GameState {
        let tiles = vec![vec![Tile::new(TileKind::Grass, "<svg/>")]];
        GameState::new(
            WorldGrid {
                width: 1,
                height: 1,
                tiles,
            },
            32,
        )
    }

    #[test]
    fn tick_advances_the_turn_counter() {
        let mut s = state();
        assert!(WorldKeeper.tick(&mut s).is_none());
        assert_eq!(s.turn, 1);
    }

    #[test]
    fn ambient_event_every_tenth_turn() {
        let mut s = state();
        let mut ambient = 0;
        for _ in 0..20 {
            if WorldKeeper.tick(&mut s).is_some() {
                ambient += 1;
            }
        }
        assert_eq!(ambient, 2);
    }
}
