//! Board files (letters a–h) and their grid columns.

use std::fmt;

/// A file on the chess board. File a is grid column 0, file h is column 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// All files from a to h.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Parse a lowercase file letter.
    pub fn from_char(c: char) -> Option<File> {
        if !c.is_ascii_lowercase() {
            return None;
        }
        File::from_column((c as u8 - b'a') as i8)
    }

    /// Map a grid column back to its file, or `None` off the board.
    #[inline]
    pub const fn from_column(column: i8) -> Option<File> {
        match column {
            0 => Some(File::FileA),
            1 => Some(File::FileB),
            2 => Some(File::FileC),
            3 => Some(File::FileD),
            4 => Some(File::FileE),
            5 => Some(File::FileF),
            6 => Some(File::FileG),
            7 => Some(File::FileH),
            _ => None,
        }
    }

    /// Return the grid column.
    #[inline]
    pub const fn column(self) -> i8 {
        self as i8
    }

    /// Return the file letter.
    #[inline]
    pub const fn letter(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
