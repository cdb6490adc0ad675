//! Zero-based grid coordinates.

use std::fmt;

/// A (row, column) pair on the 8×8 grid. Row 0 is rank 8, column 0 is file a.
///
/// Positions are freely constructible, so offsets may walk off the board;
/// [`Position::is_on_board`] and the [`Board`](crate::Board) bounds checks
/// reject those.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    /// Number of rows and columns of the grid.
    pub const SIZE: i8 = 8;

    /// Create a position from a row and a column.
    #[inline]
    pub const fn new(row: i8, column: i8) -> Position {
        Position { row, column }
    }

    /// Return the row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column.
    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Return `true` if both coordinates are within `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < Self::SIZE && self.column >= 0 && self.column < Self::SIZE
    }

    /// Return the position shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, rows: i8, columns: i8) -> Position {
        Position::new(self.row.saturating_add(rows), self.column.saturating_add(columns))
    }

    /// Row-major index (0..64). Only meaningful for on-board positions.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        debug_assert!(self.is_on_board());
        (self.row * Self::SIZE + self.column) as usize
    }

    /// Inverse of [`Position::index`].
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Position {
        debug_assert!(index < 64);
        Position::new((index / 8) as i8, (index % 8) as i8)
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.column)
    }
}
