//! Configurations related to the transition rule.

use super::{Dimension, Neighborhood};
use crate::error::Error;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The transition rule of the automaton.
///
/// `k` and `k′` refer to [`Config::k`](super::Config::k) and
/// [`Config::kprime`](super::Config::kprime).
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RuleKind {
    /// A cell in state `k` becomes `k′`.
    #[educe(Default)]
    StraightConditional,
    /// A cell in state `k` becomes `k′` if any of its neighbors is `k′`.
    ///
    /// Under [`Fixed`](super::Boundary::Fixed) boundaries the outermost
    /// cells never change.
    ConditionalNeighbor,
    /// A cell in state `k` becomes `k′` if the sum of its neighbors' states
    /// reaches the [threshold](MajorityThresholds) of the neighborhood.
    Majority,
    /// Each cell is replaced by the offspring of itself and its east neighbor.
    ///
    /// Requires exactly 3 states, read as [`Genotype`](crate::Genotype)s.
    GeneticCrossing,
}

impl FromStr for RuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" | "straight-conditional" | "s" => Ok(RuleKind::StraightConditional),
            "conditional" | "conditional-neighbor" | "c" => Ok(RuleKind::ConditionalNeighbor),
            "majority" | "m" => Ok(RuleKind::Majority),
            "crossing" | "genetic-crossing" | "x" => Ok(RuleKind::GeneticCrossing),
            _ => Err(Error::ParseError(s.to_string())),
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleKind::StraightConditional => "straight",
            RuleKind::ConditionalNeighbor => "conditional",
            RuleKind::Majority => "majority",
            RuleKind::GeneticCrossing => "crossing",
        };
        write!(f, "{}", s)
    }
}

/// Thresholds of the majority rule, one per neighborhood shape.
///
/// The sum compared against them is the raw sum of neighbor states,
/// so they only describe a true majority vote when the states are `0` and `1`.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MajorityThresholds {
    /// Two neighbors in a 1-dimensional grid.
    #[educe(Default = 1)]
    pub one_dim: usize,
    /// Four neighbors.
    #[educe(Default = 2)]
    pub von_neumann: usize,
    /// Eight neighbors.
    #[educe(Default = 5)]
    pub moore: usize,
}

impl MajorityThresholds {
    /// The threshold used for the given grid shape.
    pub fn threshold(&self, dimension: Dimension, neighborhood: Neighborhood) -> usize {
        match (dimension, neighborhood) {
            (Dimension::One, _) => self.one_dim,
            (Dimension::Two, Neighborhood::VonNeumann) => self.von_neumann,
            (Dimension::Two, Neighborhood::Moore) => self.moore,
        }
    }
}
