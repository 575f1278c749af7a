//! Resolving the neighbors of a cell.
//!
//! A neighbor is described by a [`Direction`], which is a step along each axis.
//! Each step is resolved independently by the [`Boundary`] policy, so a
//! diagonal neighbor always uses the same row as the vertical neighbor
//! and the same column as the horizontal neighbor.

use crate::{
    config::{Boundary, Config, Dimension, Neighborhood},
    grid::Grid,
    states::State,
};

/// The direction of a neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(-1, 0)`.
    North,
    /// `(1, 0)`.
    South,
    /// `(0, 1)`.
    East,
    /// `(0, -1)`.
    West,
    /// `(-1, 1)`.
    NorthEast,
    /// `(-1, -1)`.
    NorthWest,
    /// `(1, 1)`.
    SouthEast,
    /// `(1, -1)`.
    SouthWest,
}

impl Direction {
    /// The steps `(row, col)` of the direction.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

const LINE: [Direction; 2] = [Direction::East, Direction::West];

const VON_NEUMANN: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

const MOORE: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// The ordered directions of the neighbors for a grid shape.
///
/// In a 1-dimensional grid both neighborhoods reduce to east and west.
pub fn directions(dimension: Dimension, neighborhood: Neighborhood) -> &'static [Direction] {
    match (dimension, neighborhood) {
        (Dimension::One, _) => &LINE,
        (Dimension::Two, Neighborhood::VonNeumann) => &VON_NEUMANN,
        (Dimension::Two, Neighborhood::Moore) => &MOORE,
    }
}

/// The result of stepping along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A position inside the grid.
    Inside(usize),
    /// The step left the grid and was replaced by the current position.
    Clamped(usize),
    /// The step left the grid and the neighbor is a boundary cell.
    Outside,
}

impl Boundary {
    /// Steps from `index` by `step` along an axis of length `len`.
    ///
    /// `step` is `-1`, `0` or `1`, and `index < len`.
    pub fn resolve_axis(self, index: usize, step: isize, len: usize) -> Axis {
        let target = index as isize + step;
        if 0 <= target && target < len as isize {
            return Axis::Inside(target as usize);
        }
        match self {
            Boundary::Periodic => Axis::Inside((target + len as isize) as usize % len),
            Boundary::Fixed => Axis::Outside,
            Boundary::NoBoundary => Axis::Clamped(index),
        }
    }
}

/// The neighbors of a cell, in the order given by [`directions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbors {
    directions: &'static [Direction],
    states: Vec<State>,
    /// Bit `i` is set if neighbor `i` lies outside a grid with fixed
    /// boundaries and reads as the fixed state.
    outside: u8,
}

impl Neighbors {
    /// Neighbors inside the grid with the given directions and states.
    #[cfg(test)]
    pub(crate) fn new(directions: &'static [Direction], states: Vec<State>) -> Self {
        debug_assert_eq!(directions.len(), states.len());
        Neighbors {
            directions,
            states,
            outside: 0,
        }
    }

    /// An empty buffer for [`NeighborResolver::resolve_into`].
    pub fn with_capacity(capacity: usize) -> Self {
        Neighbors {
            directions: &[],
            states: Vec::with_capacity(capacity),
            outside: 0,
        }
    }

    /// The states of the neighbors.
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The directions of the neighbors.
    #[inline]
    pub fn directions(&self) -> &'static [Direction] {
        self.directions
    }

    /// The state of the neighbor in a direction,
    /// or `None` if the neighborhood has no such direction.
    pub fn get(&self, direction: Direction) -> Option<State> {
        self.directions
            .iter()
            .position(|&d| d == direction)
            .map(|i| self.states[i])
    }

    /// The state of the neighbor in a direction, or `None` if the
    /// neighborhood has no such direction or the neighbor is outside
    /// a grid with fixed boundaries.
    pub fn get_inside(&self, direction: Direction) -> Option<State> {
        let i = self.directions.iter().position(|&d| d == direction)?;
        if self.outside & (1 << i) == 0 {
            Some(self.states[i])
        } else {
            None
        }
    }

    /// Iterates over `(direction, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, State)> + '_ {
        self.directions.iter().copied().zip(self.states.iter().copied())
    }

    /// Whether any neighbor is in `state`.
    #[inline]
    pub fn contains(&self, state: State) -> bool {
        self.states.contains(&state)
    }

    /// The sum of the neighbor states.
    #[inline]
    pub fn sum(&self) -> usize {
        self.states.iter().map(|s| s.0).sum()
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no neighbors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Resolves neighbors for one combination of
/// dimensionality, neighborhood and boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborResolver {
    dimension: Dimension,
    directions: &'static [Direction],
    boundary: Boundary,
    /// State of the cells outside a grid with fixed boundaries.
    fixed_state: State,
}

impl NeighborResolver {
    /// Creates a resolver.
    pub fn new(
        dimension: Dimension,
        neighborhood: Neighborhood,
        boundary: Boundary,
        fixed_state: State,
    ) -> Self {
        NeighborResolver {
            dimension,
            directions: directions(dimension, neighborhood),
            boundary,
            fixed_state,
        }
    }

    /// Creates the resolver described by a configuration.
    pub fn from_config(config: &Config) -> Self {
        NeighborResolver::new(
            config.dimension,
            config.neighborhood,
            config.boundary,
            config.k,
        )
    }

    /// The ordered directions of the neighbors.
    #[inline]
    pub fn directions(&self) -> &'static [Direction] {
        self.directions
    }

    /// The position a neighbor is read from, or `None` if it is outside the
    /// grid and reads as the fixed state.
    ///
    /// `(row, col)` must be inside the grid.
    pub fn position(
        &self,
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r = match self.boundary.resolve_axis(row, dr, rows) {
            Axis::Inside(r) | Axis::Clamped(r) => r,
            Axis::Outside => return None,
        };
        let c = match self.boundary.resolve_axis(col, dc, cols) {
            Axis::Inside(c) | Axis::Clamped(c) => c,
            Axis::Outside => return None,
        };
        Some((r, c))
    }

    /// Writes the neighbors of `(row, col)` into `neighbors`,
    /// reusing its buffer.
    ///
    /// `(row, col)` must be inside the grid.
    pub fn resolve_into(&self, grid: &Grid, row: usize, col: usize, neighbors: &mut Neighbors) {
        let (rows, cols) = grid.dimensions();
        neighbors.directions = self.directions;
        neighbors.states.clear();
        neighbors.outside = 0;
        for (i, &direction) in self.directions.iter().enumerate() {
            let state = match self.position(rows, cols, row, col, direction) {
                Some((r, c)) => grid.at(r, c),
                None => {
                    neighbors.outside |= 1 << i;
                    self.fixed_state
                }
            };
            neighbors.states.push(state);
        }
    }

    /// The neighbors of `(row, col)`, or `None` if it is outside the grid.
    pub fn resolve(&self, grid: &Grid, row: usize, col: usize) -> Option<Neighbors> {
        grid.get(row, col)?;
        let mut neighbors = Neighbors::with_capacity(self.directions.len());
        self.resolve_into(grid, row, col, &mut neighbors);
        Some(neighbors)
    }

    /// Whether `(row, col)` is on the outermost ring of the grid.
    ///
    /// For a 1-dimensional grid only the two ends are on the edge.
    pub fn is_edge(&self, rows: usize, cols: usize, row: usize, col: usize) -> bool {
        let col_edge = col == 0 || col + 1 == cols;
        match self.dimension {
            Dimension::One => col_edge,
            Dimension::Two => col_edge || row == 0 || row + 1 == rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(v: &[usize]) -> Vec<State> {
        v.iter().map(|&s| State(s)).collect()
    }

    fn grid_3x3() -> Grid {
        Grid::from_rows(vec![states(&[1, 2, 3]), states(&[4, 5, 6]), states(&[7, 8, 9])]).unwrap()
    }

    #[test]
    fn periodic_wrap_is_mirrored() {
        let n = 7;
        assert_eq!(Boundary::Periodic.resolve_axis(0, -1, n), Axis::Inside(n - 1));
        assert_eq!(Boundary::Periodic.resolve_axis(n - 1, 1, n), Axis::Inside(0));
        assert_eq!(Boundary::Fixed.resolve_axis(0, -1, n), Axis::Outside);
        assert_eq!(Boundary::NoBoundary.resolve_axis(n - 1, 1, n), Axis::Clamped(n - 1));
        assert_eq!(Boundary::Fixed.resolve_axis(3, 1, n), Axis::Inside(4));
    }

    #[test]
    fn moore_periodic_corner() {
        let resolver = NeighborResolver::new(
            Dimension::Two,
            Neighborhood::Moore,
            Boundary::Periodic,
            State(0),
        );
        let neighbors = resolver.resolve(&grid_3x3(), 0, 0).unwrap();
        // N S E W NE NW SE SW
        assert_eq!(neighbors.states(), &states(&[7, 4, 2, 3, 8, 9, 5, 6])[..]);
        assert_eq!(neighbors.get(Direction::NorthWest), Some(State(9)));
    }

    #[test]
    fn moore_fixed_corner() {
        let resolver =
            NeighborResolver::new(Dimension::Two, Neighborhood::Moore, Boundary::Fixed, State(0));
        let neighbors = resolver.resolve(&grid_3x3(), 0, 0).unwrap();
        assert_eq!(neighbors.states(), &states(&[0, 4, 2, 0, 0, 0, 5, 0])[..]);
        assert_eq!(neighbors.get(Direction::North), Some(State(0)));
        assert_eq!(neighbors.get_inside(Direction::North), None);
        assert_eq!(neighbors.get_inside(Direction::East), Some(State(2)));

        // The buffer forgets which neighbors were outside.
        let mut buffer = neighbors;
        resolver.resolve_into(&grid_3x3(), 1, 1, &mut buffer);
        assert_eq!(buffer.get_inside(Direction::North), Some(State(2)));
    }

    #[test]
    fn moore_no_boundary_reuses_clamped_axes() {
        let resolver = NeighborResolver::new(
            Dimension::Two,
            Neighborhood::Moore,
            Boundary::NoBoundary,
            State(0),
        );
        let neighbors = resolver.resolve(&grid_3x3(), 0, 0).unwrap();
        // North and west are the cell itself; north-east coincides with east,
        // south-west with south, and north-west is the cell itself.
        assert_eq!(neighbors.states(), &states(&[1, 4, 2, 1, 2, 1, 5, 4])[..]);
    }

    #[test]
    fn one_dimensional() {
        let grid = Grid::from_rows(vec![states(&[1, 2, 3, 4])]).unwrap();
        for &neighborhood in &[Neighborhood::VonNeumann, Neighborhood::Moore] {
            let resolver =
                NeighborResolver::new(Dimension::One, neighborhood, Boundary::Fixed, State(9));
            let neighbors = resolver.resolve(&grid, 0, 0).unwrap();
            assert_eq!(neighbors.states(), &states(&[2, 9])[..]);
            assert_eq!(neighbors.get(Direction::North), None);
        }
    }

    #[test]
    fn single_row_moore_keeps_duplicates() {
        let grid = Grid::from_rows(vec![states(&[1, 2, 3])]).unwrap();
        let resolver = NeighborResolver::new(
            Dimension::Two,
            Neighborhood::Moore,
            Boundary::Periodic,
            State(0),
        );
        let neighbors = resolver.resolve(&grid, 0, 1).unwrap();
        assert_eq!(neighbors.len(), 8);
        assert_eq!(neighbors.states(), &states(&[2, 2, 3, 1, 3, 1, 3, 1])[..]);
        assert_eq!(neighbors.sum(), 16);
    }

    #[test]
    fn edges() {
        let resolver =
            NeighborResolver::new(Dimension::Two, Neighborhood::VonNeumann, Boundary::Fixed, State(0));
        assert!(resolver.is_edge(3, 3, 0, 1));
        assert!(resolver.is_edge(3, 3, 1, 2));
        assert!(!resolver.is_edge(3, 3, 1, 1));
        let resolver =
            NeighborResolver::new(Dimension::One, Neighborhood::VonNeumann, Boundary::Fixed, State(0));
        assert!(resolver.is_edge(1, 5, 0, 0));
        assert!(!resolver.is_edge(1, 5, 0, 2));
    }

    #[test]
    fn outside_cell_has_no_neighbors() {
        let resolver = NeighborResolver::new(
            Dimension::Two,
            Neighborhood::VonNeumann,
            Boundary::Periodic,
            State(0),
        );
        assert!(resolver.resolve(&grid_3x3(), 3, 0).is_none());
    }
}
