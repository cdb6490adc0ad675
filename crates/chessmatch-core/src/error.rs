//! Error types for coordinates, the grid, match play and match setup.

use crate::chess_position::ChessPosition;
use crate::color::Color;

/// Errors raised when mapping coordinates onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// The file letter or rank number lies outside a1..h8.
    #[error("coordinate {file}{rank} is out of range, valid values are a1 to h8")]
    OutOfRange {
        /// The file letter supplied.
        file: char,
        /// The rank number supplied.
        rank: u32,
    },
    /// A grid position has no coordinate because it is off the board.
    #[error("grid position ({row}, {column}) is off the board")]
    OffBoard {
        /// Grid row.
        row: i8,
        /// Grid column.
        column: i8,
    },
}

/// Errors from the grid layer. These never reach players during normal play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position is not on the 8×8 grid.
    #[error("position ({row}, {column}) is not on the board")]
    OutOfBounds {
        /// Grid row.
        row: i8,
        /// Grid column.
        column: i8,
    },
    /// A piece was placed on a cell that already holds one.
    #[error("there is already a piece on position ({row}, {column})")]
    Occupied {
        /// Grid row.
        row: i8,
        /// Grid column.
        column: i8,
    },
    /// A piece was expected on a cell that is empty.
    #[error("there is no piece on position ({row}, {column})")]
    Vacant {
        /// Grid row.
        row: i8,
        /// Grid column.
        column: i8,
    },
    /// A piece that is already on the board was placed a second time.
    #[error("piece #{index} is already on the board")]
    AlreadyPlaced {
        /// Arena index of the piece.
        index: usize,
    },
}

/// Recoverable rule violations reported by the match controller.
///
/// Whenever one of these is returned, the match is exactly as it was before
/// the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// No piece stands on the source square.
    #[error("there is no piece on source position {position}")]
    EmptySource {
        /// The source coordinate.
        position: ChessPosition,
    },
    /// The piece on the source square belongs to the opponent.
    #[error("the chosen piece on {position} is not yours")]
    WrongOwner {
        /// The source coordinate.
        position: ChessPosition,
    },
    /// The piece on the source square has no candidate destination.
    #[error("there are no possible moves for the chosen piece on {position}")]
    NoLegalMoves {
        /// The source coordinate.
        position: ChessPosition,
    },
    /// The destination is not among the piece's candidate squares.
    #[error("the chosen piece can't be moved from {from} to {to}")]
    IllegalDestination {
        /// The source coordinate.
        from: ChessPosition,
        /// The rejected destination.
        to: ChessPosition,
    },
    /// The move would leave the mover's own king attacked.
    #[error("you can't put yourself in check")]
    SelfCheck,
    /// A move was submitted after checkmate.
    #[error("the match is over")]
    MatchOver,
    /// Internal grid fault surfaced through move execution.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors from building a custom starting position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A side does not have exactly one king.
    #[error("expected 1 {color} king, found {count}")]
    KingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Two pieces were placed on the same square.
    #[error(transparent)]
    Board(#[from] BoardError),
}
