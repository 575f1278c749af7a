//! The world.

use crate::{
    config::{Boundary, Config},
    error::Error,
    grid::Grid,
    neighbors::{NeighborResolver, Neighbors},
    rules::Rule,
    states::State,
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::mem;

/// Where a world is in its lifecycle.
///
/// A configuration that passed [`Config::validate`] is the only way
/// to get a world, so a world is never unconfigured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The grid is allocated and filled, with the default state, by
    /// [`seed`](World::seed) or by [`set_grid`](World::set_grid),
    /// and has not been advanced yet.
    Seeded,
    /// The world has been advanced at least once since it was seeded.
    Stepping,
}

/// The world.
pub struct World<R: Rule> {
    /// World configuration.
    pub(crate) config: Config,

    /// The transition rule.
    pub(crate) rule: R,

    /// Neighbor lookup for the configured shape and boundary.
    resolver: NeighborResolver,

    /// The current generation.
    grid: Grid,

    /// The next generation is written here, then swapped with `grid`.
    ///
    /// It has the same dimensions as `grid` and its contents are
    /// meaningless between two generations.
    shadow: Grid,

    /// Scratch buffer for the neighbors of one cell.
    neighbors: Neighbors,

    /// Number of generations since the world was created, seeded or given a new grid.
    pub(crate) generation: u64,

    pub(crate) phase: Phase,

    /// The only random number generator of the world.
    rng: StdRng,
}

impl<R: Rule> World<R> {
    /// Creates a new world from the configuration and the rule.
    ///
    /// Every cell starts in the default state.
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &Config, rule: R) -> Result<Self, Error> {
        let (rows, cols) = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let resolver = NeighborResolver::from_config(config);
        debug!(
            "New {}x{} world: {}-dimensional, {} neighborhood, {} boundary, rule {}",
            rows, cols, config.dimension, config.neighborhood, config.boundary, R::KIND
        );
        Ok(World {
            config: config.clone(),
            rule,
            neighbors: Neighbors::with_capacity(resolver.directions().len()),
            resolver,
            grid: Grid::new(rows, cols, config.default_state)?,
            shadow: Grid::new(rows, cols, config.default_state)?,
            generation: 0,
            phase: Phase::Seeded,
            rng,
        })
    }

    /// The transition rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The neighbor resolver.
    pub fn resolver(&self) -> &NeighborResolver {
        &self.resolver
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check_state(&self, state: State) -> Result<(), Error> {
        if state.is_valid(self.config.states) {
            Ok(())
        } else {
            Err(Error::InvalidState(state, self.config.states))
        }
    }

    /// Refills the grid with the default state, then sets each cell to
    /// `target` independently with probability `probability`.
    ///
    /// Resets the generation counter. On error nothing changes.
    pub fn seed(&mut self, target: State, probability: f64) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::ProbabilityOutOfRange(probability));
        }
        self.check_state(target)?;
        self.grid.fill(self.config.default_state);
        for cell in self.grid.cells_mut() {
            if self.rng.gen_bool(probability) {
                *cell = target;
            }
        }
        self.generation = 0;
        self.phase = Phase::Seeded;
        debug!(
            "Seeded with state {} at probability {}: {:?}",
            target,
            probability,
            self.grid.census(self.config.states)
        );
        Ok(())
    }

    /// Whether the cell keeps its state regardless of the rule.
    #[inline]
    fn is_frozen(&self, row: usize, col: usize) -> bool {
        self.config.boundary == Boundary::Fixed
            && self.rule.freezes_fixed_edges()
            && self
                .resolver
                .is_edge(self.grid.rows(), self.grid.cols(), row, col)
    }

    /// Advances the world by one generation.
    ///
    /// Every cell is computed from the current grid into the shadow grid,
    /// which then becomes the current grid, so no cell ever sees a state
    /// from the generation being computed.
    pub fn advance(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        let uses_neighbors = self.rule.uses_neighbors();
        for row in 0..rows {
            for col in 0..cols {
                let current = self.grid.at(row, col);
                let next = if self.is_frozen(row, col) {
                    current
                } else {
                    if uses_neighbors {
                        self.resolver
                            .resolve_into(&self.grid, row, col, &mut self.neighbors);
                    }
                    self.rule
                        .next_state(current, &self.neighbors, &mut self.rng)
                };
                self.shadow.cells_mut()[row * cols + col] = next;
            }
        }
        mem::swap(&mut self.grid, &mut self.shadow);
        self.generation += 1;
        self.phase = Phase::Stepping;
        trace!("Generation {}", self.generation);
    }

    /// Advances the world by `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Gets the state of a cell.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<State, Error> {
        self.grid
            .get(row, col)
            .ok_or(Error::CoordOutOfRange(row, col))
    }

    /// Sets the state of a cell.
    ///
    /// The state must be one of the configured states.
    /// This edits the current generation, so the generation counter
    /// and the phase are kept.
    pub fn set_cell_state(&mut self, row: usize, col: usize, state: State) -> Result<(), Error> {
        self.check_state(state)?;
        self.grid.set(row, col, state)
    }

    /// Replaces the whole grid.
    ///
    /// The grid must have the same dimensions as the world,
    /// and all of its cells must be in configured states.
    ///
    /// Like [`seed`](World::seed), this starts over from generation 0.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), Error> {
        if grid.dimensions() != self.grid.dimensions() {
            return Err(Error::GridSizeMismatch {
                expected: self.grid.dimensions(),
                found: grid.dimensions(),
            });
        }
        if let Some(state) = grid.find_invalid(self.config.states) {
            return Err(Error::InvalidState(state, self.config.states));
        }
        self.grid = grid;
        self.generation = 0;
        self.phase = Phase::Seeded;
        Ok(())
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of generations since the world was created, seeded or given a new grid.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Where the world is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Dimension, Neighborhood, RuleKind},
        rules::{ConditionalNeighbor, GeneticCrossing, Majority, StraightConditional},
    };
    use proptest::prelude::*;

    /// Computes the next generation from a snapshot, one cell at a time,
    /// without touching the world.
    fn recompute<R: Rule>(world: &World<R>) -> Grid {
        let snapshot = world.grid().clone();
        let mut next = snapshot.clone();
        let mut rng = StdRng::seed_from_u64(0);
        for row in 0..snapshot.rows() {
            for col in 0..snapshot.cols() {
                let current = snapshot.at(row, col);
                let state = if world.is_frozen(row, col) {
                    current
                } else {
                    let neighbors = world.resolver().resolve(&snapshot, row, col).unwrap();
                    world.rule().next_state(current, &neighbors, &mut rng)
                };
                next.set(row, col, state).unwrap();
            }
        }
        next
    }

    fn boundary() -> impl Strategy<Value = Boundary> {
        prop_oneof![
            Just(Boundary::Periodic),
            Just(Boundary::Fixed),
            Just(Boundary::NoBoundary)
        ]
    }

    fn neighborhood() -> impl Strategy<Value = Neighborhood> {
        prop_oneof![Just(Neighborhood::VonNeumann), Just(Neighborhood::Moore)]
    }

    fn cells(states: usize) -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
        (1..7usize, 1..7usize).prop_flat_map(move |(rows, cols)| {
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(0..states, rows * cols),
            )
        })
    }

    fn grid_from(rows: usize, cols: usize, cells: &[usize]) -> Grid {
        Grid::from_rows(
            cells
                .chunks(cols)
                .take(rows)
                .map(|row| row.iter().map(|&s| State(s)).collect::<Vec<_>>()),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn advance_matches_snapshot_computation(
            (rows, cols, cells) in cells(3),
            neighborhood in neighborhood(),
            boundary in boundary(),
            k in 0..3usize,
            kprime in 0..3usize,
            rule in 0..3usize,
        ) {
            let config = Config::new(rows as isize, cols as isize)
                .set_neighborhood(neighborhood)
                .set_boundary(boundary)
                .set_states(3)
                .set_k(k)
                .set_kprime(kprime)
                .set_seed(0);
            let grid = grid_from(rows, cols, &cells);
            let threshold = config.threshold();
            macro_rules! check {
                ($rule:expr) => {{
                    let mut world = World::new(&config, $rule).unwrap();
                    world.set_grid(grid.clone()).unwrap();
                    let expected = recompute(&world);
                    world.advance();
                    prop_assert_eq!(world.grid(), &expected);
                }};
            }
            match rule {
                0 => check!(StraightConditional::new(State(k), State(kprime))),
                1 => check!(ConditionalNeighbor::new(State(k), State(kprime))),
                _ => check!(Majority::new(State(k), State(kprime), threshold)),
            }
        }

        #[test]
        fn states_stay_in_range(
            (rows, cols, cells) in cells(3),
            neighborhood in neighborhood(),
            boundary in boundary(),
            seed: u64,
        ) {
            let config = Config::new(rows as isize, cols as isize)
                .set_neighborhood(neighborhood)
                .set_boundary(boundary)
                .set_rule(RuleKind::GeneticCrossing)
                .set_states(3)
                .set_seed(seed);
            let mut world = World::new(&config, GeneticCrossing).unwrap();
            world.set_grid(grid_from(rows, cols, &cells)).unwrap();
            for _ in 0..5 {
                world.advance();
                prop_assert!(world.grid().cells().iter().all(|s| s.is_valid(3)));
            }
        }
    }

    #[test]
    fn seed_rejects_bad_input() {
        let config = Config::new(4, 4).set_seed(7);
        let mut world = World::new(&config, StraightConditional::new(State(0), State(1))).unwrap();
        world.set_cell_state(1, 1, State(1)).unwrap();
        let before = world.grid().clone();
        assert_eq!(world.seed(State(1), 1.5), Err(Error::ProbabilityOutOfRange(1.5)));
        assert!(world.seed(State(1), f64::NAN).is_err());
        assert_eq!(world.seed(State(2), 0.5), Err(Error::InvalidState(State(2), 2)));
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn seed_extremes() {
        let config = Config::new(5, 6).set_seed(3);
        let mut world = World::new(&config, StraightConditional::new(State(0), State(1))).unwrap();
        world.seed(State(1), 1.0).unwrap();
        assert_eq!(world.grid().census(2), vec![0, 30]);
        world.seed(State(1), 0.0).unwrap();
        assert_eq!(world.grid().census(2), vec![30, 0]);
    }

    #[test]
    fn phases_and_generations() {
        let config = Config::new(2, 2).set_seed(1);
        let mut world = World::new(&config, StraightConditional::new(State(0), State(1))).unwrap();
        assert_eq!(world.phase(), Phase::Seeded);
        world.advance_by(3);
        assert_eq!(world.phase(), Phase::Stepping);
        assert_eq!(world.generation(), 3);
        world.seed(State(1), 0.5).unwrap();
        assert_eq!(world.phase(), Phase::Seeded);
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn set_grid_restarts_generations() {
        let config = Config::new(2, 2).set_seed(1);
        let mut world = World::new(&config, StraightConditional::new(State(0), State(1))).unwrap();
        world.advance_by(2);
        world.set_cell_state(0, 0, State(0)).unwrap();
        assert_eq!(world.generation(), 2);
        assert_eq!(world.phase(), Phase::Stepping);

        world.set_grid(Grid::new(2, 2, State(0)).unwrap()).unwrap();
        assert_eq!(world.generation(), 0);
        assert_eq!(world.phase(), Phase::Seeded);

        // A rejected grid changes nothing.
        world.advance();
        assert!(world.set_grid(Grid::new(1, 2, State(0)).unwrap()).is_err());
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn set_grid_checks() {
        let config = Config::new(1, 3).set_dimension(Dimension::One);
        let mut world = World::new(&config, StraightConditional::new(State(0), State(1))).unwrap();
        let wrong = Grid::new(2, 3, State(0)).unwrap();
        assert_eq!(
            world.set_grid(wrong),
            Err(Error::GridSizeMismatch {
                expected: (1, 3),
                found: (2, 3)
            })
        );
        let invalid = Grid::from_rows(vec![vec![State(0), State(4), State(1)]]).unwrap();
        assert_eq!(world.set_grid(invalid), Err(Error::InvalidState(State(4), 2)));
        assert_eq!(world.cell_state(0, 3), Err(Error::CoordOutOfRange(0, 3)));
        assert_eq!(
            world.set_cell_state(0, 0, State(2)),
            Err(Error::InvalidState(State(2), 2))
        );
    }
}
