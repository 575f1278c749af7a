//! Configurations related to the shape of the grid:
//! dimensionality, neighborhood and boundary.

use crate::error::Error;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensionality of the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimension {
    /// A single row of cells.
    ///
    /// Every cell has two neighbors, west and east,
    /// whatever the neighborhood is.
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    One,
    /// A `rows × cols` grid.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Two,
}

impl Dimension {
    /// Gets the dimensionality from the number of axes.
    ///
    /// Returns an error for anything other than 1 or 2.
    pub fn from_count(count: usize) -> Result<Self, Error> {
        match count {
            1 => Ok(Dimension::One),
            2 => Ok(Dimension::Two),
            n => Err(Error::UnsupportedDimension(n)),
        }
    }

    /// Number of axes.
    pub fn count(self) -> usize {
        match self {
            Dimension::One => 1,
            Dimension::Two => 2,
        }
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "1d" | "1D" => Ok(Dimension::One),
            "2" | "2d" | "2D" => Ok(Dimension::Two),
            _ => match s.parse::<usize>() {
                Ok(n) => Dimension::from_count(n),
                Err(_) => Err(Error::ParseError(s.to_string())),
            },
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// The cells whose states influence the update of a cell.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Neighborhood {
    /// The 4 orthogonal neighbors.
    ///
    /// ```plaintext
    /// .o.
    /// o.o
    /// .o.
    /// ```
    #[educe(Default)]
    VonNeumann,
    /// The 4 orthogonal and the 4 diagonal neighbors.
    ///
    /// ```plaintext
    /// ooo
    /// o.o
    /// ooo
    /// ```
    Moore,
}

impl FromStr for Neighborhood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "von-neumann" | "vonneumann" | "vn" => Ok(Neighborhood::VonNeumann),
            "moore" | "m" => Ok(Neighborhood::Moore),
            _ => Err(Error::ParseError(s.to_string())),
        }
    }
}

impl Display for Neighborhood {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Neighborhood::VonNeumann => "von-neumann",
            Neighborhood::Moore => "moore",
        };
        write!(f, "{}", s)
    }
}

/// How to read a neighbor that falls outside the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Boundary {
    /// The grid wraps around as a torus.
    #[educe(Default)]
    Periodic,
    /// The grid is surrounded by cells in the state `k`.
    Fixed,
    /// A missing neighbor is replaced by the cell itself,
    /// along the axis where it is missing.
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoBoundary,
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "periodic" | "p" => Ok(Boundary::Periodic),
            "fixed" | "f" => Ok(Boundary::Fixed),
            "none" | "no-boundary" | "n" => Ok(Boundary::NoBoundary),
            _ => Err(Error::ParseError(s.to_string())),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Boundary::Periodic => "periodic",
            Boundary::Fixed => "fixed",
            Boundary::NoBoundary => "none",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for boundary in [Boundary::Periodic, Boundary::Fixed, Boundary::NoBoundary] {
            assert_eq!(boundary.to_string().parse::<Boundary>(), Ok(boundary));
        }
        for neighborhood in [Neighborhood::VonNeumann, Neighborhood::Moore] {
            assert_eq!(
                neighborhood.to_string().parse::<Neighborhood>(),
                Ok(neighborhood)
            );
        }
    }

    #[test]
    fn unsupported_dimension() {
        assert_eq!("3".parse::<Dimension>(), Err(Error::UnsupportedDimension(3)));
        assert_eq!(Dimension::from_count(0), Err(Error::UnsupportedDimension(0)));
        assert_eq!(
            "flat".parse::<Dimension>(),
            Err(Error::ParseError(String::from("flat")))
        );
    }
}
