//! The 8×8 candidate grid, packed one bit per square.

use std::fmt;

use crate::position::Position;

/// An 8×8 boolean grid of candidate squares, bit `row * 8 + column` per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveGrid(u64);

impl MoveGrid {
    /// No squares set.
    pub const EMPTY: MoveGrid = MoveGrid(0);

    /// Return `true` if no square is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one square is set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the set squares.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `position` is set. Off-board positions are never set.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        position.is_on_board() && (self.0 & (1u64 << position.index())) != 0
    }

    /// Set `position`. Off-board positions are ignored.
    #[inline]
    pub fn insert(&mut self, position: Position) {
        if position.is_on_board() {
            self.0 |= 1u64 << position.index();
        }
    }

    /// Return a copy with `position` set.
    #[inline]
    pub fn with(mut self, position: Position) -> MoveGrid {
        self.insert(position);
        self
    }

    /// Iterate over the set positions in row-major order.
    #[inline]
    pub fn iter(self) -> MoveGridIter {
        MoveGridIter(self.0)
    }

    /// Expand into a `[row][column]` boolean matrix.
    pub fn to_array(self) -> [[bool; 8]; 8] {
        let mut grid = [[false; 8]; 8];
        for pos in self {
            grid[pos.row() as usize][pos.column() as usize] = true;
        }
        grid
    }
}

/// Iterator over the set positions of a [`MoveGrid`].
pub struct MoveGridIter(u64);

impl Iterator for MoveGridIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            None
        } else {
            let pos = Position::from_index(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(pos)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for MoveGridIter {}

impl IntoIterator for MoveGrid {
    type Item = Position;
    type IntoIter = MoveGridIter;

    fn into_iter(self) -> MoveGridIter {
        self.iter()
    }
}

impl fmt::Debug for MoveGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..8 {
            write!(f, "  {} ", 8 - row)?;
            for column in 0..8 {
                if self.contains(Position::new(row, column)) {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
