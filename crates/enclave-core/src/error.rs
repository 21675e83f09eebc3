//! The domain error taxonomy shared by all board operations.

use crate::Coord;
use std::error::Error;
use std::fmt;

/// Errors from board queries and mutations.
///
/// These are expected, recoverable conditions: the relocation search
/// consumes `Occupied` and `OutOfBounds` as ordinary "this candidate
/// didn't work" signals and moves on to the next candidate. They become
/// caller-visible only when a query or `relocate` is invoked directly
/// with a coordinate that violates its contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate is not a cell of this board.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// The operation requires an agent, but the cell is vacant.
    Vacant {
        /// The vacant cell.
        coord: Coord,
    },
    /// The destination of a relocation is already occupied.
    Occupied {
        /// The occupied destination.
        coord: Coord,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord } => write!(f, "coordinate {coord} is out of bounds"),
            Self::Vacant { coord } => write!(f, "there is no agent at {coord}"),
            Self::Occupied { coord } => write!(f, "cell {coord} is already occupied"),
        }
    }
}

impl Error for BoardError {}
