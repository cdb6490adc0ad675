//! Front-end errors.

use chessmatch_core::{CoordinateError, MatchError};

/// Errors that can occur while reading input or running a session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The typed text is not shaped like a coordinate.
    #[error("invalid input '{input}', valid values are a1 to h8")]
    InvalidInput {
        /// The text that failed to parse.
        input: String,
    },

    /// The text names a file or rank outside the board.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    /// The match refused the move.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// An I/O error occurred while reading input or writing the board.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    /// Return `true` for errors a player can recover from by typing again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CliError::InvalidInput { .. } | CliError::Coordinate(_) | CliError::Match(_)
        )
    }
}
