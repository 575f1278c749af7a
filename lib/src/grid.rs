//! The grid store.

use crate::{error::Error, states::State};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `rows × cols` matrix of cell states, stored in row-major order.
///
/// Coordinates are `(row, col)`, both 0-indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid filled with `state`.
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(rows: usize, cols: usize, state: State) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::NonPositiveSize(rows as isize, cols as isize));
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![state; rows * cols],
        })
    }

    /// Creates a grid from a list of rows.
    ///
    /// Returns an error if there are no rows, no columns,
    /// or the rows have different lengths.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = State>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = None;
        for row in rows {
            let len_before = cells.len();
            cells.extend(row);
            let len = cells.len() - len_before;
            match cols {
                None => cols = Some(len),
                Some(cols) if cols != len => {
                    return Err(Error::GridSizeMismatch {
                        expected: (row_count + 1, cols),
                        found: (row_count + 1, len),
                    })
                }
                _ => (),
            }
            row_count += 1;
        }
        let cols = cols.unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(Error::NonPositiveSize(row_count as isize, cols as isize));
        }
        Ok(Grid {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a grid built by this crate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Gets the state of a cell, or `None` if it is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, row: usize, col: usize, state: State) -> Result<(), Error> {
        let i = self
            .index(row, col)
            .ok_or(Error::CoordOutOfRange(row, col))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Gets the state of a cell known to be inside the grid.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> State {
        self.cells[row * self.cols + col]
    }

    /// Sets every cell to `state`.
    pub fn fill(&mut self, state: State) {
        self.cells.fill(state);
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [State] {
        &mut self.cells
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> Option<&[State]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Number of cells in each state, indexed by the state value.
    ///
    /// The returned vector has length `states`; cells whose state is
    /// not smaller than `states` are not counted.
    pub fn census(&self, states: usize) -> Vec<usize> {
        let mut counts = vec![0; states];
        for &State(s) in &self.cells {
            if let Some(count) = counts.get_mut(s) {
                *count += 1;
            }
        }
        counts
    }

    /// Finds a cell whose state is not one of `states` states.
    pub(crate) fn find_invalid(&self, states: usize) -> Option<State> {
        self.cells.iter().copied().find(|s| !s.is_valid(states))
    }
}

/// One line per row, states separated by spaces.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let mut first = true;
            for state in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", state)?;
                first = false;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![State(0), State(1)], vec![State(1)]];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(Error::GridSizeMismatch { .. })
        ));
        assert_eq!(
            Grid::from_rows(Vec::<Vec<State>>::new()),
            Err(Error::NonPositiveSize(0, 0))
        );
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Grid::new(3, 0, State(0)), Err(Error::NonPositiveSize(3, 0)));
        assert_eq!(Grid::new(0, 2, State(0)), Err(Error::NonPositiveSize(0, 2)));
        let grid = Grid::new(1, 2, State(1)).unwrap();
        assert_eq!(grid.to_string(), "1 1\n");
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(vec![
            vec![State(1), State(0), State(2)],
            vec![State(0), State(0), State(1)],
        ])
        .unwrap();
        assert_eq!(grid.to_string(), "1 0 2\n0 0 1\n");
    }

    #[test]
    fn census_ignores_foreign_states() {
        let grid = Grid::from_rows(vec![vec![State(0), State(1), State(1), State(5)]]).unwrap();
        assert_eq!(grid.census(2), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn test_get_and_set_cell(rows in 1..20usize, cols in 1..20usize, row in 0..25usize, col in 0..25usize, state in 0..4usize) {
            let mut grid = Grid::new(rows, cols, State(0)).unwrap();
            let result = grid.set(row, col, State(state));
            if row < rows && col < cols {
                prop_assert!(result.is_ok());
                prop_assert_eq!(grid.get(row, col), Some(State(state)));
            } else {
                prop_assert_eq!(result, Err(Error::CoordOutOfRange(row, col)));
                prop_assert_eq!(grid.get(row, col), None);
            }
        }
    }
}
