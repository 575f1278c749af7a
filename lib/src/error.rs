//! All kinds of errors in this crate.

use crate::states::State;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Grid dimensions are not set.
    GridNotSized,
    /// Grid dimensions should be positive, got {0} x {1}.
    NonPositiveSize(isize, isize),
    /// Only 1-dimensional and 2-dimensional grids are supported, got {0} dimensions.
    UnsupportedDimension(usize),
    /// A 1-dimensional grid must have exactly one row, got {0}.
    OneDimensionalRows(isize),
    /// Unsupported number of states for this rule: {0}.
    UnsupportedStateCount(usize),
    /// Probability must be between 0 and 1, got {0}.
    ProbabilityOutOfRange(f64),
    /// Cell ({0}, {1}) is outside the grid.
    CoordOutOfRange(usize, usize),
    /// Expected a {expected:?} grid, got {found:?}.
    GridSizeMismatch {
        /// Dimensions `(rows, cols)` of the world.
        expected: (usize, usize),
        /// Dimensions `(rows, cols)` of the given grid.
        found: (usize, usize),
    },
    /// State {0} is not one of the {1} configured states.
    InvalidState(State, usize),
    /// Unable to parse {0:?}.
    ParseError(String),
}
