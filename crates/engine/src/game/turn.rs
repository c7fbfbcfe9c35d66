//! The five-stage turn pipeline.
//!
//! personalities -> arbiter -> executor -> storyteller -> world keeper.
//! Every stage appends to the event log. A refused action is recorded
//! and the turn carries on; nothing in here can fault a connection.

use wyrdgrid_domain::{GameState, PlayerId};

use super::agents::{
    Arbiter, BodyExecutor, PersonalityAgent, Storyteller, WeightedArbiter, WorldKeeper,
};
use super::command::Command;

pub struct TurnPipeline {
    personalities: Vec<PersonalityAgent>,
    arbiter: Box<dyn Arbiter>,
    executor: BodyExecutor,
    storyteller: Storyteller,
    keeper: WorldKeeper,
}

impl TurnPipeline {
    pub fn new() -> Self {
        Self::with_arbiter(Box::new(WeightedArbiter))
    }

    pub fn with_arbiter(arbiter: Box<dyn Arbiter>) -> Self {
        Self {
            personalities: PersonalityAgent::roster(),
            arbiter,
            executor: BodyExecutor,
            storyteller: Storyteller,
            keeper: WorldKeeper,
        }
    }

    /// Run one full turn for `actor`'s command.
    pub fn run(&self, state: &mut GameState, actor: &PlayerId, command: &Command) {
        // 1. Personalities generate intentions
        let intentions: Vec<_> = self
            .personalities
            .iter()
            .map(|p| p.propose(state, actor, command))
            .collect();
        for intention in &intentions {
            state.record(intention.rationale.clone());
        }

        // 2. Arbiter decides the action
        let action = self.arbiter.decide(&intentions);
        state.record(format!("Arbiter decides: {action}"));

        // 3. The body executes it
        match self.executor.execute(state, actor, &action) {
            Ok(outcome) => state.record(outcome),
            Err(err) => {
                tracing::debug!(player_id = %actor, error = %err, "Action refused");
                state.record(format!("The attempt fails: {err}"));
            }
        }

        // 4. Storyteller narrates
        state.record(self.storyteller.narrate(state));

        // 5. World upkeep
        if let Some(ambient) = self.keeper.tick(state) {
            state.record(ambient);
        }
    }
}

impl Default for TurnPipeline {
    fn default() -> Self {
        Self::new()
    }
}
