//! Mendelian crossing of genotypes.

use super::Rule;
use crate::{
    config::RuleKind,
    neighbors::{Direction, Neighbors},
    states::{Genotype, State},
};
use rand::Rng;
use std::convert::TryFrom;

/// The genotype of the offspring of two parents.
///
/// | Parents | Offspring |
/// |---|---|
/// | `GG × GG` | `GG` |
/// | `gg × gg` | `gg` |
/// | `GG × gg` | `Gg` |
/// | otherwise | `Gg` (1/2), `GG` (1/4), `gg` (1/4) |
///
/// Only the last case draws a number from `rng`.
pub fn cross<G: Rng + ?Sized>(parent1: Genotype, parent2: Genotype, rng: &mut G) -> Genotype {
    use Genotype::*;
    match (parent1, parent2) {
        (Dominant, Dominant) => Dominant,
        (Recessive, Recessive) => Recessive,
        (Dominant, Recessive) | (Recessive, Dominant) => Heterozygous,
        _ => {
            let x: f64 = rng.gen();
            if x < 0.5 {
                Heterozygous
            } else if x < 0.75 {
                Dominant
            } else {
                Recessive
            }
        }
    }
}

/// Each cell is replaced by the offspring of itself and its east neighbor.
///
/// A cell on the east edge of a grid with fixed boundaries has no east
/// neighbor and is crossed with itself.
///
/// The states are read as [`Genotype`]s, so the world must have exactly
/// 3 states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneticCrossing;

impl Rule for GeneticCrossing {
    const KIND: RuleKind = RuleKind::GeneticCrossing;

    fn next_state<G: Rng + ?Sized>(
        &self,
        current: State,
        neighbors: &Neighbors,
        rng: &mut G,
    ) -> State {
        let partner = neighbors.get_inside(Direction::East).unwrap_or(current);
        match (Genotype::try_from(current), Genotype::try_from(partner)) {
            (Ok(parent1), Ok(parent2)) => cross(parent1, parent2, rng).into(),
            _ => current,
        }
    }
}
