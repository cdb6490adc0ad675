//! Player colors and the board geometry that depends on them.

use std::fmt;
use std::ops::Not;

/// A player color: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White starts on the high rows and
    /// moves toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Grid row this color's king and rooks start on.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Grid row this color's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn pawns_walk_toward_the_enemy_back_rank() {
        // White pawns start on row 6 and step toward row 0.
        assert_eq!(Color::White.pawn_row() + 5 * Color::White.forward(), 1);
        assert_eq!(Color::Black.pawn_row() + 5 * Color::Black.forward(), 6);
    }

    #[test]
    fn back_row_is_behind_the_pawns() {
        assert_eq!(Color::White.pawn_row() - Color::White.forward(), Color::White.back_row());
        assert_eq!(Color::Black.pawn_row() - Color::Black.forward(), Color::Black.back_row());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "WHITE");
        assert_eq!(format!("{}", Color::Black), "BLACK");
    }
}
