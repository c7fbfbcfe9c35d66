//! Personality voices.
//!
//! Every player character carries the same two inner voices. Each turn
//! both weigh the inbound command against their instincts and produce an
//! intention for the arbiter to judge.

use wyrdgrid_domain::{GameState, PlayerId};

use super::{Intention, ProposedAction};
use crate::game::command::Command;

/// How eagerly a voice endorses risky, state-changing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperament {
    Bold,
    Wary,
}

impl Temperament {
    fn voice(&self) -> &'static str {
        match self {
            Self::Bold => "brave and reckless",
            Self::Wary => "cautious and observant",
        }
    }
}

/// One inner voice of a player character.
#[derive(Debug, Clone)]
pub struct PersonalityAgent {
    temperament: Temperament,
}

impl PersonalityAgent {
    pub fn new(temperament: Temperament) -> Self {
        Self { temperament }
    }

    /// The standard pair every player hears.
    pub fn roster() -> Vec<Self> {
        vec![Self::new(Temperament::Bold), Self::new(Temperament::Wary)]
    }

    /// Weigh the player's command against this voice's instincts.
    pub fn propose(&self, state: &GameState, actor: &PlayerId, command: &Command) -> Intention {
        let voice = self.temperament.voice();
        let (action, weight, urge) = match (self.temperament, command) {
            (Temperament::Bold, Command::Move(dir)) => {
                (ProposedAction::Move(*dir), 9, format!("charge {dir}"))
            }
            (Temperament::Wary, Command::Move(dir)) => (
                ProposedAction::Move(*dir),
                5,
                format!("scout {dir} before committing"),
            ),
            (Temperament::Bold, Command::Pickup { item }) => (
                ProposedAction::Pickup { item: item.clone() },
                8,
                format!("seize the {item}"),
            ),
            (Temperament::Wary, Command::Pickup { item }) => (
                ProposedAction::Pickup { item: item.clone() },
                6,
                format!("carefully collect the {item}"),
            ),
            (Temperament::Bold, Command::Drop { item }) => (
                ProposedAction::Drop { item: item.clone() },
                7,
                format!("cast the {item} aside"),
            ),
            (Temperament::Wary, Command::Drop { item }) => (
                ProposedAction::Drop { item: item.clone() },
                6,
                format!("set the {item} down gently"),
            ),
            (Temperament::Bold, Command::Equip { slot, item }) => (
                ProposedAction::Equip {
                    slot: *slot,
                    item: item.clone(),
                },
                8,
                format!("ready the {item}"),
            ),
            (Temperament::Wary, Command::Equip { slot, item }) => (
                ProposedAction::Equip {
                    slot: *slot,
                    item: item.clone(),
                },
                6,
                format!("strap on the {item} properly"),
            ),
            (Temperament::Bold, Command::Say { words }) => (
                ProposedAction::Say {
                    words: words.clone(),
                },
                6,
                "speak up".to_string(),
            ),
            (Temperament::Wary, Command::Say { words }) => (
                ProposedAction::Say {
                    words: words.clone(),
                },
                7,
                "choose these words with care".to_string(),
            ),
            // No usable command: fall back to instinct. The wary voice
            // checks the ground underfoot first.
            (Temperament::Bold, Command::Unknown { .. }) => {
                (ProposedAction::Observe, 2, "explore".to_string())
            }
            (Temperament::Wary, Command::Unknown { .. }) => {
                match Self::item_underfoot(state, actor) {
                    Some(item) => (
                        ProposedAction::Pickup { item: item.clone() },
                        4,
                        format!("pick up the {item} at our feet"),
                    ),
                    None => (ProposedAction::Observe, 3, "study the surroundings".to_string()),
                }
            }
        };

        Intention {
            voice: voice.to_string(),
            action,
            rationale: format!("Based on being {voice}, I want to {urge}."),
            weight,
        }
    }

    fn item_underfoot(state: &GameState, actor: &PlayerId) -> Option<String> {
        let pos = state.player(actor)?.position;
        state
            .grid
            .tile(pos)?
            .items
            .first()
            .map(|i| i.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrdgrid_domain::{Direction, Item, Tile, TileKind, WorldGrid};

    fn flat_state() -> GameState {
        let tiles = (0..3)
            .map(|_| {
                (0..3)
                    .map(|_| Tile::new(TileKind::Grass, "<svg/>"))
                    .collect()
            })
            .collect();
        let grid = WorldGrid {
            width: 3,
            height: 3,
            tiles,
        };
        GameState::new(grid, 32)
    }

    fn id(raw: &str) -> PlayerId {
        PlayerId::new(raw).expect("valid id")
    }

    #[test]
    fn both_voices_endorse_a_move_with_bold_leading() {
        let mut state = flat_state();
        state.join(id("alice")).expect("joins");
        let command = Command::Move(Direction::East);

        let intentions: Vec<_> = PersonalityAgent::roster()
            .iter()
            .map(|p| p.propose(&state, &id("alice"), &command))
            .collect();

        assert_eq!(intentions.len(), 2);
        assert!(intentions
            .iter()
            .all(|i| i.action == ProposedAction::Move(Direction::East)));
        assert!(intentions[0].weight > intentions[1].weight);
        assert!(intentions[0].rationale.starts_with("Based on being"));
    }

    #[test]
    fn wary_voice_spots_items_underfoot() {
        let mut state = flat_state();
        state.join(id("alice")).expect("joins");
        let pos = state.player(&id("alice")).expect("present").position;
        state
            .grid
            .drop_item(pos, Item::new("oak staff", "Knotted.", "<svg/>"));

        let wary = PersonalityAgent::new(Temperament::Wary);
        let intention = wary.propose(
            &state,
            &id("alice"),
            &Command::Unknown {
                raw: "dance".into(),
            },
        );
        assert_eq!(
            intention.action,
            ProposedAction::Pickup {
                item: "oak staff".into()
            }
        );
    }

    #[test]
    fn unknown_command_on_bare_ground_falls_back_to_observing() {
        let mut state = flat_state();
        state.join(id("alice")).expect("joins");
        for agent in PersonalityAgent::roster() {
            let intention = agent.propose(
                &state,
                &id("alice"),
                &Command::Unknown {
                    raw: "hum".into(),
                },
            );
            assert_eq!(intention.action, ProposedAction::Observe);
        }
    }
}
