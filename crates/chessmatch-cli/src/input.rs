//! Prompt input parsing.

use chessmatch_core::ChessPosition;

use crate::error::CliError;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A board coordinate such as `e2`.
    Position(ChessPosition),
    /// `help` -- print the command list.
    Help,
    /// `quit` or `exit` -- leave the session.
    Quit,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    match line.trim() {
        "quit" | "exit" => Ok(Command::Quit),
        "help" => Ok(Command::Help),
        text => parse_position(text).map(Command::Position),
    }
}

/// Parse a coordinate: the first character is the file letter, the rest
/// the rank number.
///
/// # Errors
///
/// [`CliError::InvalidInput`] if the text is not a letter followed by a
/// number, [`CliError::Coordinate`] if the letter or number is off the board.
pub fn parse_position(text: &str) -> Result<ChessPosition, CliError> {
    let text = text.trim();
    let invalid = || CliError::InvalidInput {
        input: text.to_string(),
    };

    let mut chars = text.chars();
    let file = chars.next().ok_or_else(invalid)?;
    let rank: u32 = chars.as_str().parse().map_err(|_| invalid())?;
    Ok(ChessPosition::new(file, rank)?)
}
