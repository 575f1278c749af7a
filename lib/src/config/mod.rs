//! Automaton configuration.

use crate::{
    error::Error,
    rules::{ConditionalNeighbor, GeneticCrossing, Majority, StraightConditional},
    states::State,
    traits::Simulate,
    world::World,
};
use educe::Educe;
use log::debug;

mod rule_kind;
mod topology;

pub use rule_kind::{MajorityThresholds, RuleKind};
pub use topology::{Boundary, Dimension, Neighborhood};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Automaton configuration.
///
/// The world will be generated from this configuration.
/// Nothing is checked until [`world`](Config::world) is called.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Dimensionality.
    pub dimension: Dimension,

    /// Neighborhood.
    pub neighborhood: Neighborhood,

    /// Boundary policy.
    pub boundary: Boundary,

    /// Transition rule.
    pub rule: RuleKind,

    /// Number of rows.
    ///
    /// `0` together with `cols == 0` means that the grid is not sized yet.
    /// Must be `1` for 1-dimensional grids.
    pub rows: isize,

    /// Number of columns.
    pub cols: isize,

    /// Number of states. The states are `State(0)` to `State(states - 1)`.
    #[educe(Default = 2)]
    pub states: usize,

    /// The source state `k` of the rules.
    ///
    /// Also the state of the cells outside a grid with
    /// [`Fixed`](Boundary::Fixed) boundaries.
    pub k: State,

    /// The target state `k′` of the rules.
    #[educe(Default(expression = "State(1)"))]
    pub kprime: State,

    /// The state every cell starts with.
    pub default_state: State,

    /// Thresholds of the majority rule.
    pub thresholds: MajorityThresholds,

    /// Seed of the random number generator.
    ///
    /// `None` means that the generator is seeded from the system entropy
    /// when the world is created.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(rows: isize, cols: isize) -> Self {
        Config {
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the dimensionality.
    pub fn set_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the neighborhood.
    pub fn set_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the transition rule.
    pub fn set_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the size of the grid.
    pub fn set_grid_size(mut self, rows: isize, cols: isize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the number of states.
    pub fn set_states(mut self, states: usize) -> Self {
        self.states = states;
        self
    }

    /// Sets the source state `k`.
    pub fn set_k<S: Into<State>>(mut self, k: S) -> Self {
        self.k = k.into();
        self
    }

    /// Sets the target state `k′`.
    pub fn set_kprime<S: Into<State>>(mut self, kprime: S) -> Self {
        self.kprime = kprime.into();
        self
    }

    /// Sets the state every cell starts with.
    pub fn set_default_state<S: Into<State>>(mut self, default_state: S) -> Self {
        self.default_state = default_state.into();
        self
    }

    /// Sets the thresholds of the majority rule.
    pub fn set_thresholds(mut self, thresholds: MajorityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// The threshold of the majority rule for the configured grid shape.
    pub fn threshold(&self) -> usize {
        self.thresholds.threshold(self.dimension, self.neighborhood)
    }

    /// Checks the configuration.
    ///
    /// Returns the grid size `(rows, cols)`.
    pub fn validate(&self) -> Result<(usize, usize), Error> {
        if self.rows == 0 && self.cols == 0 {
            return Err(Error::GridNotSized);
        }
        if self.rows <= 0 || self.cols <= 0 {
            return Err(Error::NonPositiveSize(self.rows, self.cols));
        }
        if self.dimension == Dimension::One && self.rows != 1 {
            return Err(Error::OneDimensionalRows(self.rows));
        }
        if self.states < 2 || (self.rule == RuleKind::GeneticCrossing && self.states != 3) {
            return Err(Error::UnsupportedStateCount(self.states));
        }
        for &state in &[self.k, self.kprime, self.default_state] {
            if !state.is_valid(self.states) {
                return Err(Error::InvalidState(state, self.states));
            }
        }
        Ok((self.rows as usize, self.cols as usize))
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn world(&self) -> Result<Box<dyn Simulate>, Error> {
        debug!("Creating a world with rule {}", self.rule);
        match self.rule {
            RuleKind::StraightConditional => {
                let rule = StraightConditional::new(self.k, self.kprime);
                Ok(Box::new(World::new(self, rule)?))
            }
            RuleKind::ConditionalNeighbor => {
                let rule = ConditionalNeighbor::new(self.k, self.kprime);
                Ok(Box::new(World::new(self, rule)?))
            }
            RuleKind::Majority => {
                let rule = Majority::new(self.k, self.kprime, self.threshold());
                Ok(Box::new(World::new(self, rule)?))
            }
            RuleKind::GeneticCrossing => Ok(Box::new(World::new(self, GeneticCrossing)?)),
        }
    }
}
