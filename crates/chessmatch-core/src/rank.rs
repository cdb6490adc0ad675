//! Board ranks (numbers 1–8) and their grid rows.

use std::fmt;

/// A rank on the chess board. Rank 8 is grid row 0, rank 1 is row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 1,
    Rank2 = 2,
    Rank3 = 3,
    Rank4 = 4,
    Rank5 = 5,
    Rank6 = 6,
    Rank7 = 7,
    Rank8 = 8,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Create a rank from its number (1..=8).
    #[inline]
    pub const fn from_number(number: u32) -> Option<Rank> {
        match number {
            1 => Some(Rank::Rank1),
            2 => Some(Rank::Rank2),
            3 => Some(Rank::Rank3),
            4 => Some(Rank::Rank4),
            5 => Some(Rank::Rank5),
            6 => Some(Rank::Rank6),
            7 => Some(Rank::Rank7),
            8 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Map a grid row back to its rank, or `None` off the board.
    #[inline]
    pub const fn from_row(row: i8) -> Option<Rank> {
        if row < 0 || row > 7 {
            return None;
        }
        Rank::from_number((8 - row) as u32)
    }

    /// Return the rank number (1..=8).
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Return the grid row.
    #[inline]
    pub const fn row(self) -> i8 {
        8 - self as i8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn rank_eight_is_the_top_row() {
        assert_eq!(Rank::Rank8.row(), 0);
        assert_eq!(Rank::Rank1.row(), 7);
    }

    #[test]
    fn row_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_row(rank.row()), Some(rank));
            assert_eq!(Rank::from_number(rank.number()), Some(rank));
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
        assert_eq!(Rank::from_row(-1), None);
        assert_eq!(Rank::from_row(8), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rank::Rank1), "1");
        assert_eq!(format!("{}", Rank::Rank8), "8");
    }
}
