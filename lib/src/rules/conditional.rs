//! Conditional transition on a neighbor.

use super::Rule;
use crate::{config::RuleKind, neighbors::Neighbors, states::State};
use rand::Rng;

/// A cell in state `k` becomes `k′` if at least one neighbor is in state `k′`.
///
/// With fixed boundaries the neighborhood of an edge cell is not fully
/// defined, so edge cells keep their states. With no boundaries, a missing
/// neighbor is the cell itself, which is never `k′` when the cell is `k`
/// (unless `k == k′`), so only the real neighbors of an edge cell count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionalNeighbor {
    k: State,
    kprime: State,
}

impl ConditionalNeighbor {
    /// Creates the rule `k → k′` conditioned on a `k′` neighbor.
    pub fn new(k: State, kprime: State) -> Self {
        ConditionalNeighbor { k, kprime }
    }
}

impl Rule for ConditionalNeighbor {
    const KIND: RuleKind = RuleKind::ConditionalNeighbor;

    #[inline]
    fn next_state<G: Rng + ?Sized>(
        &self,
        current: State,
        neighbors: &Neighbors,
        _: &mut G,
    ) -> State {
        if current == self.k && neighbors.contains(self.kprime) {
            self.kprime
        } else {
            current
        }
    }

    fn freezes_fixed_edges(&self) -> bool {
        true
    }
}
