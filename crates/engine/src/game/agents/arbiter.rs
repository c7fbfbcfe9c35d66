//! Picks the winning intention each turn.

use super::{Intention, ProposedAction};

/// Decides which of the competing intentions a turn acts on.
#[cfg_attr(test, mockall::automock)]
pub trait Arbiter: Send + Sync {
    fn decide(&self, intentions: &[Intention]) -> ProposedAction;
}

/// Highest weight wins; ties go to whichever voice spoke first. With no
/// intentions at all the turn falls back to observing.
#[derive(Debug, Default)]
pub struct WeightedArbiter;

impl Arbiter for WeightedArbiter {
    fn decide(&self, intentions: &[Intention]) -> ProposedAction {
        let mut best: Option<&Intention> = None;
        for intention in intentions {
            if best.map(|b| intention.weight > b.weight).unwrap_or(true) {
                best = Some(intention);
            }
        }
        best.map(|i| i.action.clone())
            .unwrap_or(ProposedAction::Observe)
    }
}
