//! Transition rules.
//!
//! Each rule computes the next state of one cell from its current state
//! and the states of its neighbors in the previous generation.

mod conditional;
mod crossing;
mod majority;
mod straight;

use crate::{config::RuleKind, neighbors::Neighbors, states::State};
use rand::Rng;

pub use conditional::ConditionalNeighbor;
pub use crossing::{cross, GeneticCrossing};
pub use majority::Majority;
pub use straight::StraightConditional;

/// A transition rule.
///
/// Please use the following structs instead of implementing by yourself:
/// - [`StraightConditional`]
/// - [`ConditionalNeighbor`]
/// - [`Majority`]
/// - [`GeneticCrossing`]
pub trait Rule {
    /// Which of the enumerated rules this is.
    const KIND: RuleKind;

    /// The state of a cell in the next generation.
    ///
    /// Only [`GeneticCrossing`] draws from `rng`.
    fn next_state<G: Rng + ?Sized>(&self, current: State, neighbors: &Neighbors, rng: &mut G)
        -> State;

    /// Whether the rule needs the neighbors at all.
    ///
    /// If not, the stepper passes an empty neighbor list.
    fn uses_neighbors(&self) -> bool {
        true
    }

    /// Whether the outermost cells keep their states
    /// when the boundary is [`Fixed`](crate::Boundary::Fixed).
    fn freezes_fixed_edges(&self) -> bool {
        false
    }
}
