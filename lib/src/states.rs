//! Cell states.

use crate::error::Error;
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// A configuration with `states = n` allows the states `State(0)` to
/// `State(n - 1)`. The value itself is also what the majority rule sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State(pub usize);

impl State {
    /// Whether the state belongs to a set of `states` states.
    #[inline]
    pub fn is_valid(self, states: usize) -> bool {
        self.0 < states
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for State {
    #[inline]
    fn from(value: usize) -> Self {
        State(value)
    }
}

/// The genotype of an individual.
///
/// Used as the three cell states of the allele model: the ordinal of each
/// variant is the [`State`] it is stored as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Genotype {
    /// Homozygous dominant, `GG`.
    Dominant,
    /// `Gg`.
    Heterozygous,
    /// Homozygous recessive, `gg`.
    Recessive,
}

impl Genotype {
    /// All genotypes, in ordinal order.
    pub const ALL: [Genotype; 3] = [
        Genotype::Dominant,
        Genotype::Heterozygous,
        Genotype::Recessive,
    ];

    /// The allele pair written in the usual notation.
    pub fn alleles(self) -> &'static str {
        match self {
            Genotype::Dominant => "GG",
            Genotype::Heterozygous => "Gg",
            Genotype::Recessive => "gg",
        }
    }
}

impl From<Genotype> for State {
    #[inline]
    fn from(genotype: Genotype) -> Self {
        State(genotype as usize)
    }
}

impl TryFrom<State> for Genotype {
    type Error = Error;

    fn try_from(state: State) -> Result<Self, Self::Error> {
        Genotype::ALL
            .get(state.0)
            .copied()
            .ok_or(Error::InvalidState(state, Genotype::ALL.len()))
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Genotype::Dominant => "Dominant",
            Genotype::Heterozygous => "Heterozygous",
            Genotype::Recessive => "Recessive",
        };
        write!(f, "{}", s)
    }
}
