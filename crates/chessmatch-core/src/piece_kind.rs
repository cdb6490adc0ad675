//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
///
/// The kind alone decides how a piece generates candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, pawn first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the display letter (uppercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Return `true` for rooks, bishops and queens.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn letters_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(a.letter(), b.letter());
                }
            }
        }
    }

    #[test]
    fn sliders() {
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(!PieceKind::King.is_slider());
        assert!(!PieceKind::Pawn.is_slider());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Knight), "N");
        assert_eq!(format!("{}", PieceKind::King), "K");
    }
}
