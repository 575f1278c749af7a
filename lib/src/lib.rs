//! __alleleca__ is a configurable cellular automaton engine,
//! used to model how allele frequencies drift across generations.
//!
//! A [`Config`] chooses the dimensionality, the neighborhood, the boundary
//! policy and the transition rule. [`Config::world`] turns it into a world,
//! which is seeded and then advanced one generation at a time.
//! All cells of a generation are computed from the previous generation.
//!
//! # Example
//!
//! ```rust
//! use alleleca_lib::{Boundary, Config, Neighborhood, RuleKind, State};
//!
//! let config = Config::new(16, 16)
//!     .set_neighborhood(Neighborhood::Moore)
//!     .set_boundary(Boundary::Periodic)
//!     .set_rule(RuleKind::Majority)
//!     .set_seed(42);
//! let mut world = config.world().unwrap();
//! world.seed(State(1), 0.5).unwrap();
//! world.advance();
//! print!("{}", world.snapshot());
//! ```

mod config;
mod error;
mod grid;
mod neighbors;
pub mod population;
pub mod rules;
mod states;
mod traits;
mod world;

pub use config::{Boundary, Config, Dimension, MajorityThresholds, Neighborhood, RuleKind};
pub use error::Error;
pub use grid::Grid;
pub use neighbors::{directions, Axis, Direction, NeighborResolver, Neighbors};
pub use states::{Genotype, State};
pub use traits::Simulate;
pub use world::{Phase, World};
