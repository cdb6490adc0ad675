//! The interactive two-player loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use chessmatch_core::{ChessMatch, ChessPosition, Color, MoveGrid};

use crate::config::Config;
use crate::error::CliError;
use crate::input::{Command, parse_command};
use crate::ui::Painter;

/// Command list printed by `help`.
pub const HELP: &str = "\
Type the square of the piece to move, then the square to move it to.
Castling is the king's two-square move; en passant is the pawn's diagonal move.
Commands: help, quit, exit";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The match ended in checkmate.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// A player typed `quit` or `exit`.
    Quit,
    /// The input stream ended.
    InputClosed,
}

/// What a prompt produced.
enum Reply {
    Square(ChessPosition),
    Retry,
    Stop(Outcome),
}

/// A match played at one terminal, reading moves from `reader` and drawing
/// the board to `writer`.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    config: Config,
    painter: Painter,
    chess_match: ChessMatch,
    /// Message shown under the next board render.
    notice: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session from the standard layout.
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self::with_match(reader, writer, config, ChessMatch::new())
    }

    /// Start a session from a prepared match.
    pub fn with_match(reader: R, writer: W, config: Config, chess_match: ChessMatch) -> Self {
        Self {
            reader,
            writer,
            painter: Painter::new(config.color()),
            config,
            chess_match,
            notice: None,
        }
    }

    /// Return the match being played.
    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }

    /// Play until checkmate, `quit`, or the end of input.
    ///
    /// Rejected input and refused moves are shown to the player and the
    /// half-move starts over; only I/O failures end the loop with an error.
    pub fn run(&mut self) -> Result<Outcome, CliError> {
        info!("session started");
        loop {
            if let Some(winner) = self.chess_match.winner() {
                self.render(MoveGrid::EMPTY)?;
                info!(%winner, turn = self.chess_match.turn(), "match finished");
                return Ok(Outcome::Checkmate { winner });
            }

            self.render(MoveGrid::EMPTY)?;
            let source = match self.prompt("Source position: ")? {
                Reply::Square(source) => source,
                Reply::Retry => continue,
                Reply::Stop(outcome) => return Ok(outcome),
            };
            let highlights = match self.chess_match.possible_moves(source) {
                Ok(highlights) => highlights,
                Err(err) => {
                    self.reject(err.into())?;
                    continue;
                }
            };
            debug!(%source, candidates = highlights.count(), "source selected");

            self.render(highlights)?;
            let target = match self.prompt("Target position: ")? {
                Reply::Square(target) => target,
                Reply::Retry => continue,
                Reply::Stop(outcome) => return Ok(outcome),
            };

            match self.chess_match.perform_move(source, target) {
                Ok(Some(captured)) => self.notice = Some(format!("Captured {captured}")),
                Ok(None) => {}
                Err(err) => self.reject(err.into())?,
            }
        }
    }

    fn render(&mut self, highlights: MoveGrid) -> Result<(), CliError> {
        if self.config.clear_screen() {
            self.painter.clear_screen(&mut self.writer)?;
        }
        self.painter
            .match_view(&mut self.writer, &self.chess_match, highlights)?;
        if let Some(notice) = self.notice.take() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{notice}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Reply, CliError> {
        writeln!(self.writer)?;
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            info!("input closed");
            return Ok(Reply::Stop(Outcome::InputClosed));
        }
        writeln!(self.writer)?;

        match parse_command(&line) {
            Ok(Command::Position(position)) => Ok(Reply::Square(position)),
            Ok(Command::Help) => {
                self.notice = Some(HELP.to_string());
                Ok(Reply::Retry)
            }
            Ok(Command::Quit) => {
                info!("player quit");
                Ok(Reply::Stop(Outcome::Quit))
            }
            Err(err) => {
                self.reject(err)?;
                Ok(Reply::Retry)
            }
        }
    }

    /// Queue a recoverable error for display; anything else is fatal.
    fn reject(&mut self, err: CliError) -> Result<(), CliError> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(error = %err, "input rejected");
        self.notice = Some(err.to_string());
        Ok(())
    }
}
