//! A trait for `World`.

use crate::{
    config::Config,
    error::Error,
    grid::Grid,
    rules::Rule,
    states::State,
    world::{Phase, World},
};
use std::fmt::Write;

/// A trait for `World`.
///
/// So that we can switch between different rule types using trait objects.
pub trait Simulate {
    /// Refills the grid with the default state, then sets each cell to
    /// `target` independently with probability `probability`.
    ///
    /// Resets the generation counter. On error nothing changes.
    fn seed(&mut self, target: State, probability: f64) -> Result<(), Error>;

    /// Advances the world by one generation.
    fn advance(&mut self);

    /// Advances the world by `n` generations.
    fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// The current grid.
    fn grid(&self) -> &Grid;

    /// Gets the state of a cell.
    fn cell_state(&self, row: usize, col: usize) -> Result<State, Error>;

    /// Sets the state of a cell.
    fn set_cell_state(&mut self, row: usize, col: usize, state: State) -> Result<(), Error>;

    /// Replaces the whole grid and restarts from generation 0.
    fn set_grid(&mut self, grid: Grid) -> Result<(), Error>;

    /// World configuration.
    fn config(&self) -> &Config;

    /// Number of generations since the world was created, seeded or given a new grid.
    fn generation(&self) -> u64;

    /// Where the world is in its lifecycle.
    fn phase(&self) -> Phase;

    /// Number of cells in each state, indexed by the state value.
    fn census(&self) -> Vec<usize> {
        self.grid().census(self.config().states)
    }

    /// Displays the current generation:
    /// a `Generation N:` line, then one line per row with the states
    /// separated by spaces.
    fn snapshot(&self) -> String {
        let mut str = String::new();
        writeln!(str, "Generation {}:", self.generation()).unwrap();
        write!(str, "{}", self.grid()).unwrap();
        str
    }
}

/// The `Simulate` trait is implemented for every `World`.
impl<R: Rule> Simulate for World<R> {
    fn seed(&mut self, target: State, probability: f64) -> Result<(), Error> {
        self.seed(target, probability)
    }

    fn advance(&mut self) {
        self.advance()
    }

    fn grid(&self) -> &Grid {
        self.grid()
    }

    fn cell_state(&self, row: usize, col: usize) -> Result<State, Error> {
        self.cell_state(row, col)
    }

    fn set_cell_state(&mut self, row: usize, col: usize, state: State) -> Result<(), Error> {
        self.set_cell_state(row, col, state)
    }

    fn set_grid(&mut self, grid: Grid) -> Result<(), Error> {
        self.set_grid(grid)
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}
