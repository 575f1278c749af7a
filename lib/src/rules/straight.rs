//! Straight conditional transition.

use super::Rule;
use crate::{config::RuleKind, neighbors::Neighbors, states::State};
use rand::Rng;

/// A cell in state `k` becomes `k′`, whatever its neighbors are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StraightConditional {
    k: State,
    kprime: State,
}

impl StraightConditional {
    /// Creates the rule `k → k′`.
    pub fn new(k: State, kprime: State) -> Self {
        StraightConditional { k, kprime }
    }
}

impl Rule for StraightConditional {
    const KIND: RuleKind = RuleKind::StraightConditional;

    #[inline]
    fn next_state<G: Rng + ?Sized>(&self, current: State, _: &Neighbors, _: &mut G) -> State {
        if current == self.k {
            self.kprime
        } else {
            current
        }
    }

    fn uses_neighbors(&self) -> bool {
        false
    }
}
