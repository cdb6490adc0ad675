//! A half-move as a pair of coordinates.

use std::fmt;

use crate::chess_position::ChessPosition;

/// A source and destination coordinate. Castling is the king's two-column
/// move; en passant is the capturing pawn's diagonal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: ChessPosition,
    target: ChessPosition,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(source: ChessPosition, target: ChessPosition) -> Move {
        Move { source, target }
    }

    /// Return the source coordinate.
    #[inline]
    pub const fn source(self) -> ChessPosition {
        self.source
    }

    /// Return the destination coordinate.
    #[inline]
    pub const fn target(self) -> ChessPosition {
        self.target
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::chess_position::ChessPosition;

    #[test]
    fn accessors_and_display() {
        let source = ChessPosition::new('e', 2).unwrap();
        let target = ChessPosition::new('e', 4).unwrap();
        let mv = Move::new(source, target);
        assert_eq!(mv.source(), source);
        assert_eq!(mv.target(), target);
        assert_eq!(format!("{mv}"), "e2e4");
    }
}
