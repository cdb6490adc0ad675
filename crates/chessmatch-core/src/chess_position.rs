//! Human-facing board coordinates and their mapping onto the grid.

use std::fmt;

use crate::error::CoordinateError;
use crate::file::File;
use crate::position::Position;
use crate::rank::Rank;

/// A board coordinate as players name it: a file letter and a rank number.
///
/// The mapping onto [`Position`] is pure and invertible: rank 8 is row 0,
/// rank 1 is row 7, file a is column 0, file h is column 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    file: File,
    rank: Rank,
}

impl ChessPosition {
    /// Create a coordinate from a file letter (`'a'..='h'`) and a rank number (`1..=8`).
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::OutOfRange`] if either part is outside the board.
    pub fn new(file: char, rank: u32) -> Result<ChessPosition, CoordinateError> {
        match (File::from_char(file), Rank::from_number(rank)) {
            (Some(file), Some(rank)) => Ok(ChessPosition { file, rank }),
            _ => Err(CoordinateError::OutOfRange { file, rank }),
        }
    }

    /// Create a coordinate from already-validated parts.
    #[inline]
    pub const fn from_parts(file: File, rank: Rank) -> ChessPosition {
        ChessPosition { file, rank }
    }

    /// Convert a grid position back into a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::OffBoard`] if the position is outside the grid.
    pub fn from_position(position: Position) -> Result<ChessPosition, CoordinateError> {
        match (File::from_column(position.column()), Rank::from_row(position.row())) {
            (Some(file), Some(rank)) => Ok(ChessPosition { file, rank }),
            _ => Err(CoordinateError::OffBoard {
                row: position.row(),
                column: position.column(),
            }),
        }
    }

    /// Coordinate of a grid position known to be on the board.
    #[inline]
    pub(crate) const fn from_grid(position: Position) -> ChessPosition {
        debug_assert!(position.is_on_board());
        ChessPosition {
            file: File::ALL[position.column() as usize],
            rank: Rank::ALL[(7 - position.row()) as usize],
        }
    }

    /// Return the file.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Return the rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Return the grid position.
    #[inline]
    pub const fn to_position(self) -> Position {
        Position::new(self.rank.row(), self.file.column())
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
