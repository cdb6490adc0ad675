//! Pieces and the stable handles the board stores for them.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Stable handle of a piece inside a match's piece arena.
///
/// Board cells hold handles, never pieces, so looking a piece up or moving it
/// between the board and the captured list is an indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: u8) -> PieceId {
        PieceId(index)
    }

    /// Return the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A colored piece together with the number of moves it has made.
///
/// A move count of zero means the piece has never moved, which is what
/// castling eligibility is decided on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    move_count: u32,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            move_count: 0,
        }
    }

    /// Return the same piece with a given move history length.
    #[inline]
    pub const fn with_move_count(self, move_count: u32) -> Piece {
        Piece { move_count, ..self }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return how many moves this piece has made.
    #[inline]
    pub const fn move_count(self) -> u32 {
        self.move_count
    }

    #[inline]
    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    #[inline]
    pub(crate) fn decrease_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "move count underflow on undo");
        self.move_count -= 1;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}({})", color_prefix, self.kind.letter(), self.move_count)
    }
}
