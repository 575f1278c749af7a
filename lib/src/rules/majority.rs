//! Majority rule.

use super::Rule;
use crate::{config::RuleKind, neighbors::Neighbors, states::State};
use rand::Rng;

/// A cell in state `k` becomes `k′` if the sum of its neighbors' states
/// is at least the threshold.
///
/// The sum is over the state values, not a count of matching neighbors.
/// For binary states `{0, 1}` and the default thresholds this is a vote
/// of at least half the neighbors; for more states it is not a real
/// majority vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Majority {
    k: State,
    kprime: State,
    threshold: usize,
}

impl Majority {
    /// Creates the rule `k → k′` with the given threshold.
    pub fn new(k: State, kprime: State, threshold: usize) -> Self {
        Majority {
            k,
            kprime,
            threshold,
        }
    }

    /// The threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Rule for Majority {
    const KIND: RuleKind = RuleKind::Majority;

    #[inline]
    fn next_state<G: Rng + ?Sized>(
        &self,
        current: State,
        neighbors: &Neighbors,
        _: &mut G,
    ) -> State {
        if current == self.k && neighbors.sum() >= self.threshold {
            self.kprime
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    const DIRS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[test]
    fn von_neumann_threshold() {
        let rule = Majority::new(State(0), State(1), 2);
        let mut rng = StdRng::seed_from_u64(0);
        for bits in 0..16usize {
            let states = (0..4).map(|i| State((bits >> i) & 1)).collect();
            let neighbors = Neighbors::new(&DIRS, states);
            let expected = if bits.count_ones() >= 2 { State(1) } else { State(0) };
            assert_eq!(rule.next_state(State(0), &neighbors, &mut rng), expected);
        }
    }
}
