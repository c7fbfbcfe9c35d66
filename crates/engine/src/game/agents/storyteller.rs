//! Turns the state of the world into one line of narrative per turn.

use wyrdgrid_domain::GameState;

/// Narrates each turn. One sentence, deterministic, written after the
/// executor has had its say.
#[derive(Debug, Default)]
pub struct Storyteller;

impl Storyteller {
    pub fn narrate(&self, state: &GameState) -> String {
        let turn = state.turn + 1;
        match state.players.len() {
            0 => "The grid lies quiet.".to_string(),
            1 => format!("Turn {turn}: a lone wanderer walks the wyrd grid."),
            n => format!("Turn {turn}: {n} wanderers cross the wyrd grid."),
        }
    }
}
