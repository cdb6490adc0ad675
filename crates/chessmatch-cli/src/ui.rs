//! Terminal rendering of the board and match status.

use std::io::{self, Write};

use chessmatch_core::{ChessMatch, Color, MoveGrid, Piece, Position};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_WHITE: &str = "\x1b[37m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_GREEN_BACKGROUND: &str = "\x1b[42m";
const ANSI_CLEAR: &str = "\x1b[H\x1b[2J";

/// Writes the board and match status to a terminal.
///
/// With colors off, black pieces print in lowercase and highlighted empty
/// squares print as `*`.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    /// Create a painter, with or without ANSI escapes.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Clear the terminal. A no-op without colors.
    pub fn clear_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.color {
            write!(out, "{ANSI_CLEAR}")?;
        }
        out.flush()
    }

    /// Draw the board with rank labels 8..1 down the side and file labels
    /// underneath, shading the `highlights` squares.
    pub fn board<W: Write>(
        &self,
        out: &mut W,
        pieces: &[[Option<Piece>; 8]; 8],
        highlights: MoveGrid,
    ) -> io::Result<()> {
        for (row, cells) in pieces.iter().enumerate() {
            write!(out, "{} ", 8 - row)?;
            for (column, cell) in cells.iter().enumerate() {
                let lit = highlights.contains(Position::new(row as i8, column as i8));
                self.square(out, *cell, lit)?;
                write!(out, " ")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "  a b c d e f g h")
    }

    fn square<W: Write>(&self, out: &mut W, piece: Option<Piece>, lit: bool) -> io::Result<()> {
        if !self.color {
            return match piece {
                None if lit => write!(out, "*"),
                None => write!(out, "-"),
                Some(p) if p.color() == Color::Black => {
                    write!(out, "{}", p.kind().letter().to_ascii_lowercase())
                }
                Some(p) => write!(out, "{p}"),
            };
        }

        if lit {
            write!(out, "{ANSI_GREEN_BACKGROUND}")?;
        }
        match piece {
            None => write!(out, "-{ANSI_RESET}"),
            Some(p) => write!(out, "{}{p}{ANSI_RESET}", self.tint(p.color())),
        }
    }

    fn tint(&self, color: Color) -> &'static str {
        match color {
            Color::White => ANSI_WHITE,
            Color::Black => ANSI_YELLOW,
        }
    }

    /// List captured pieces per color, in capture order.
    pub fn captured<W: Write>(&self, out: &mut W, captured: &[Piece]) -> io::Result<()> {
        writeln!(out, "Captured pieces:")?;
        for (label, color) in [("White", Color::White), ("Black", Color::Black)] {
            let letters: Vec<String> = captured
                .iter()
                .filter(|p| p.color() == color)
                .map(ToString::to_string)
                .collect();
            write!(out, "{label}: ")?;
            self.colored(out, color, &format!("[{}]", letters.join(", ")))?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Turn number, then either the waiting player (and `CHECK!`) or
    /// `CHECKMATE!` with the winner.
    pub fn status<W: Write>(&self, out: &mut W, chess_match: &ChessMatch) -> io::Result<()> {
        writeln!(out, "Turn: {}", chess_match.turn())?;
        match chess_match.winner() {
            None => {
                let player = chess_match.current_player();
                write!(out, "Waiting player: ")?;
                self.colored(out, player, &player.to_string())?;
                writeln!(out)?;
                if chess_match.check() {
                    writeln!(out, "CHECK!")?;
                }
            }
            Some(winner) => {
                writeln!(out, "CHECKMATE!")?;
                writeln!(out, "WINNER: {winner}")?;
            }
        }
        Ok(())
    }

    /// Full view: board, captured pieces and status.
    pub fn match_view<W: Write>(
        &self,
        out: &mut W,
        chess_match: &ChessMatch,
        highlights: MoveGrid,
    ) -> io::Result<()> {
        self.board(out, &chess_match.pieces(), highlights)?;
        writeln!(out)?;
        self.captured(out, &chess_match.captured_pieces())?;
        writeln!(out)?;
        self.status(out, chess_match)
    }

    fn colored<W: Write>(&self, out: &mut W, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            write!(out, "{}{text}{ANSI_RESET}", self.tint(color))
        } else {
            write!(out, "{text}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessmatch_core::{ChessPosition, PieceKind};

    fn render(painter: Painter, chess_match: &ChessMatch, highlights: MoveGrid) -> String {
        let mut out = Vec::new();
        painter.match_view(&mut out, chess_match, highlights).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_initial_board() {
        let text = render(Painter::new(false), &ChessMatch::new(), MoveGrid::EMPTY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r ");
        assert_eq!(lines[1], "7 p p p p p p p p ");
        assert_eq!(lines[2], "6 - - - - - - - - ");
        assert_eq!(lines[6], "2 P P P P P P P P ");
        assert_eq!(lines[7], "1 R N B Q K B N R ");
        assert_eq!(lines[8], "  a b c d e f g h");
        assert!(text.contains("White: []\nBlack: []\n"));
        assert!(text.contains("Turn: 1\nWaiting player: WHITE\n"));
        assert!(!text.contains("CHECK"));
    }

    #[test]
    fn plain_highlights() {
        let chess_match = ChessMatch::new();
        let source = ChessPosition::new('e', 2).unwrap();
        let moves = chess_match.possible_moves(source).unwrap();
        let text = render(Painter::new(false), &chess_match, moves);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "4 - - - - * - - - ");
        assert_eq!(lines[5], "3 - - - - * - - - ");
    }

    #[test]
    fn colored_board_uses_ansi_escapes() {
        let chess_match = ChessMatch::new();
        let source = ChessPosition::new('g', 1).unwrap();
        let moves = chess_match.possible_moves(source).unwrap();
        let text = render(Painter::new(true), &chess_match, moves);
        assert!(text.contains("\x1b[33mK\x1b[0m"));
        assert!(text.contains("\x1b[37mK\x1b[0m"));
        assert!(text.contains("\x1b[42m-\x1b[0m"));
    }

    #[test]
    fn captured_lists_in_order() {
        let mut out = Vec::new();
        let captured = [
            Piece::new(PieceKind::Pawn, Color::White),
            Piece::new(PieceKind::Knight, Color::Black),
            Piece::new(PieceKind::Queen, Color::White),
        ];
        Painter::new(false).captured(&mut out, &captured).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Captured pieces:\nWhite: [P, Q]\nBlack: [N]\n"
        );
    }

    #[test]
    fn clear_screen_respects_color() {
        let mut out = Vec::new();
        Painter::new(false).clear_screen(&mut out).unwrap();
        assert!(out.is_empty());
        Painter::new(true).clear_screen(&mut out).unwrap();
        assert_eq!(out, ANSI_CLEAR.as_bytes());
    }
}
