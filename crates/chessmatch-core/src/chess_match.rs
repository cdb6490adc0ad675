//! The match controller: turn state, move validation, check and checkmate.

use std::ops::ControlFlow;

use tracing::{debug, info, trace};

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::chess_move::Move;
use crate::chess_position::ChessPosition;
use crate::color::Color;
use crate::error::{BoardError, MatchError};
use crate::move_grid::MoveGrid;
use crate::movegen::{MoveContext, possible_moves};
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::setup::MatchBuilder;

/// A match in progress: the board, the piece arena and the turn state.
///
/// Every half-move goes through [`ChessMatch::perform_move`], which either
/// applies the move completely or returns an error with the match untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMatch {
    pub(crate) board: Board,
    /// Piece arena, indexed by [`PieceId`].
    pub(crate) pieces: Vec<Piece>,
    /// Captured pieces in capture order.
    pub(crate) captured: Vec<PieceId>,
    turn: u32,
    current_player: Color,
    check: bool,
    winner: Option<Color>,
    en_passant_vulnerable: Option<PieceId>,
}

impl ChessMatch {
    /// Start a match from the standard 32-piece layout, White to move.
    pub fn new() -> ChessMatch {
        MatchBuilder::standard()
            .build()
            .expect("the standard layout has one king per side")
    }

    /// Assemble a match from a validated setup.
    pub(crate) fn from_setup(
        board: Board,
        pieces: Vec<Piece>,
        current_player: Color,
    ) -> Result<ChessMatch, BoardError> {
        let mut chess_match = ChessMatch {
            board,
            pieces,
            captured: Vec::new(),
            turn: 1,
            current_player,
            check: false,
            winner: None,
            en_passant_vulnerable: None,
        };
        chess_match.check = chess_match.test_check(current_player);
        if chess_match.check && !chess_match.has_legal_move(current_player)? {
            let winner = current_player.flip();
            chess_match.winner = Some(winner);
            chess_match.current_player = winner;
        }
        Ok(chess_match)
    }

    // --- Snapshot accessors ---

    /// Return the turn counter. It starts at 1 and grows after every
    /// half-move that does not end the match.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Return the color to move. After checkmate this is the winner.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Return `true` if the player to move is in check.
    #[inline]
    pub fn check(&self) -> bool {
        self.check
    }

    /// Return `true` once the match has ended in checkmate.
    #[inline]
    pub fn checkmate(&self) -> bool {
        self.winner.is_some()
    }

    /// Return the winner, if the match is over.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Return the square of the pawn that may be taken en passant on this
    /// half-move, if any.
    pub fn en_passant_vulnerable(&self) -> Option<ChessPosition> {
        self.en_passant_vulnerable
            .and_then(|id| self.board.position_of(id))
            .map(ChessPosition::from_grid)
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the 8×8 grid of pieces, indexed `[row][column]` (row 0 is rank 8).
    pub fn pieces(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (pos, id) in self.board.occupants() {
            grid[pos.row() as usize][pos.column() as usize] = Some(self.pieces[id.index()]);
        }
        grid
    }

    /// Return the piece standing on `position`, if any.
    pub fn piece_at(&self, position: ChessPosition) -> Option<Piece> {
        self.board
            .occupant(position.to_position())
            .map(|id| self.pieces[id.index()])
    }

    /// Return the captured pieces of one color, in capture order.
    pub fn captured(&self, color: Color) -> Vec<Piece> {
        self.captured_pieces()
            .into_iter()
            .filter(|piece| piece.color() == color)
            .collect()
    }

    /// Return all captured pieces, in capture order.
    pub fn captured_pieces(&self) -> Vec<Piece> {
        self.captured
            .iter()
            .map(|id| self.pieces[id.index()])
            .collect()
    }

    /// Return the candidate squares of whatever piece stands on `position`,
    /// regardless of whose turn it is. Empty for an empty square.
    pub fn candidates(&self, position: ChessPosition) -> MoveGrid {
        self.board
            .occupant(position.to_position())
            .map_or(MoveGrid::EMPTY, |id| possible_moves(&self.context(), id))
    }

    // --- Operations ---

    /// Return the candidate squares of the current player's piece on `source`,
    /// for highlighting.
    ///
    /// # Errors
    ///
    /// [`MatchError::EmptySource`], [`MatchError::WrongOwner`] or
    /// [`MatchError::NoLegalMoves`] if `source` is not a movable piece of the
    /// current player; [`MatchError::MatchOver`] after checkmate.
    pub fn possible_moves(&self, source: ChessPosition) -> Result<MoveGrid, MatchError> {
        self.ensure_in_progress()?;
        self.validate_source(source)
    }

    /// Play the current player's piece from `source` to `target`.
    ///
    /// Returns the piece captured by the move, if any. On success the turn
    /// passes to the opponent unless the move was checkmate.
    ///
    /// # Errors
    ///
    /// Any error leaves the match exactly as it was: the source checks of
    /// [`ChessMatch::possible_moves`], [`MatchError::IllegalDestination`] if
    /// `target` is not a candidate, and [`MatchError::SelfCheck`] if the move
    /// would leave the mover's king attacked.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing from the board.
    pub fn perform_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> Result<Option<Piece>, MatchError> {
        self.ensure_in_progress()?;
        let candidates = self.validate_source(source)?;
        if !candidates.contains(target.to_position()) {
            return Err(MatchError::IllegalDestination {
                from: source,
                to: target,
            });
        }

        let mover = self.current_player;
        let record = self.execute(source.to_position(), target.to_position())?;
        if self.test_check(mover) {
            self.undo(record)?;
            debug!(%source, %target, "move rejected, king would be left in check");
            return Err(MatchError::SelfCheck);
        }

        // The new vulnerable pawn must be visible to the checkmate search: an
        // en passant capture can be the only escape.
        let moved = self.pieces[record.moved.index()];
        self.en_passant_vulnerable = record
            .is_double_step(moved.kind())
            .then_some(record.moved);

        let opponent = mover.flip();
        self.check = self.test_check(opponent);
        if self.check && !self.has_legal_move(opponent)? {
            self.winner = Some(mover);
            info!(winner = %mover, turn = self.turn, "checkmate");
        } else {
            if self.check {
                info!(player = %opponent, turn = self.turn, "check");
            }
            self.next_turn();
        }

        let captured = record.captured.map(|capture| self.pieces[capture.id.index()]);
        debug!(%source, %target, captured = ?captured, "move performed");
        Ok(captured)
    }

    /// List every move of the current player that does not leave their own
    /// king attacked.
    ///
    /// # Errors
    ///
    /// [`MatchError::MatchOver`] after checkmate.
    pub fn legal_moves(&self) -> Result<Vec<Move>, MatchError> {
        self.ensure_in_progress()?;
        let mut scratch = self.clone();
        let mut moves = Vec::new();
        let flow = scratch.for_each_legal_move(self.current_player, |source, target| {
            moves.push(Move::new(
                ChessPosition::from_grid(source),
                ChessPosition::from_grid(target),
            ));
            ControlFlow::Continue(())
        })?;
        debug_assert!(flow.is_continue());
        Ok(moves)
    }

    // --- Internals ---

    pub(crate) fn context(&self) -> MoveContext<'_> {
        MoveContext {
            board: &self.board,
            pieces: &self.pieces,
            en_passant: self.en_passant_vulnerable,
        }
    }

    fn ensure_in_progress(&self) -> Result<(), MatchError> {
        if self.checkmate() {
            Err(MatchError::MatchOver)
        } else {
            Ok(())
        }
    }

    fn validate_source(&self, source: ChessPosition) -> Result<MoveGrid, MatchError> {
        let id = self
            .board
            .piece(source.to_position())?
            .ok_or(MatchError::EmptySource { position: source })?;
        if self.pieces[id.index()].color() != self.current_player {
            return Err(MatchError::WrongOwner { position: source });
        }
        let candidates = possible_moves(&self.context(), id);
        if candidates.is_empty() {
            return Err(MatchError::NoLegalMoves { position: source });
        }
        Ok(candidates)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.flip();
    }

    /// Locate the king of `color`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such king; a match without one is corrupt.
    fn king_position(&self, color: Color) -> Position {
        self.board
            .occupants()
            .find(|&(_, id)| {
                let piece = self.pieces[id.index()];
                piece.kind() == PieceKind::King && piece.color() == color
            })
            .map(|(pos, _)| pos)
            .unwrap_or_else(|| panic!("there is no {color} king on the board"))
    }

    /// Return `true` if the king of `color` is attacked.
    pub(crate) fn test_check(&self, color: Color) -> bool {
        is_attacked(&self.context(), self.king_position(color), color.flip())
    }

    /// Return `true` if `color` has any move that leaves its king safe.
    fn has_legal_move(&mut self, color: Color) -> Result<bool, BoardError> {
        let flow = self.for_each_legal_move(color, |source, target| {
            trace!(?source, ?target, "found a move that keeps the king safe");
            ControlFlow::Break(())
        })?;
        Ok(flow.is_break())
    }

    /// Try every candidate move of `color` with execute/test/undo and hand the
    /// safe ones to `visit` until it breaks. The match is restored after
    /// every trial.
    fn for_each_legal_move(
        &mut self,
        color: Color,
        mut visit: impl FnMut(Position, Position) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>, BoardError> {
        let movers: Vec<(Position, PieceId)> = self
            .board
            .occupants()
            .filter(|&(_, id)| self.pieces[id.index()].color() == color)
            .collect();

        for (source, id) in movers {
            let candidates = possible_moves(&self.context(), id);
            for target in candidates {
                let record = self.execute(source, target)?;
                let safe = !self.test_check(color);
                self.undo(record)?;
                if safe && visit(source, target).is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMatch;
    use crate::chess_position::ChessPosition;
    use crate::color::Color;
    use crate::error::MatchError;
    use crate::piece_kind::PieceKind;
    use crate::setup::MatchBuilder;

    fn sq(coord: &str) -> ChessPosition {
        let mut chars = coord.chars();
        let file = chars.next().unwrap();
        ChessPosition::new(file, chars.as_str().parse().unwrap()).unwrap()
    }

    fn play(chess_match: &mut ChessMatch, moves: &[(&str, &str)]) {
        for &(from, to) in moves {
            chess_match
                .perform_move(sq(from), sq(to))
                .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
        }
    }

    #[test]
    fn initial_state() {
        let chess_match = ChessMatch::new();
        assert_eq!(chess_match.turn(), 1);
        assert_eq!(chess_match.current_player(), Color::White);
        assert!(!chess_match.check());
        assert!(!chess_match.checkmate());
        assert_eq!(chess_match.winner(), None);
        assert_eq!(chess_match.en_passant_vulnerable(), None);
        assert!(chess_match.captured_pieces().is_empty());

        let grid = chess_match.pieces();
        assert_eq!(grid[0][4].map(|p| (p.kind(), p.color())), Some((PieceKind::King, Color::Black)));
        assert_eq!(grid[7][3].map(|p| (p.kind(), p.color())), Some((PieceKind::Queen, Color::White)));
        assert_eq!(grid.iter().flatten().filter(|cell| cell.is_some()).count(), 32);
    }

    #[test]
    fn possible_moves_validates_the_source() {
        let chess_match = ChessMatch::new();
        assert_eq!(
            chess_match.possible_moves(sq("e4")),
            Err(MatchError::EmptySource { position: sq("e4") })
        );
        assert_eq!(
            chess_match.possible_moves(sq("e7")),
            Err(MatchError::WrongOwner { position: sq("e7") })
        );
        assert_eq!(
            chess_match.possible_moves(sq("a1")),
            Err(MatchError::NoLegalMoves { position: sq("a1") })
        );

        let knight = chess_match.possible_moves(sq("g1")).unwrap();
        assert_eq!(knight.count(), 2);
        assert!(knight.contains(sq("f3").to_position()));
        assert!(knight.contains(sq("h3").to_position()));
    }

    #[test]
    fn illegal_destination_is_rejected_without_side_effects() {
        let mut chess_match = ChessMatch::new();
        let before = chess_match.clone();
        assert_eq!(
            chess_match.perform_move(sq("e2"), sq("e5")),
            Err(MatchError::IllegalDestination { from: sq("e2"), to: sq("e5") })
        );
        assert_eq!(chess_match, before);
    }

    #[test]
    fn turns_alternate() {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("e2", "e4")]);
        assert_eq!(chess_match.turn(), 2);
        assert_eq!(chess_match.current_player(), Color::Black);
        play(&mut chess_match, &[("e7", "e5")]);
        assert_eq!(chess_match.turn(), 3);
        assert_eq!(chess_match.current_player(), Color::White);
    }

    #[test]
    fn capture_is_returned_and_recorded() {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("e2", "e4"), ("d7", "d5")]);
        let captured = chess_match.perform_move(sq("e4"), sq("d5")).unwrap();
        assert_eq!(captured.map(|p| (p.kind(), p.color())), Some((PieceKind::Pawn, Color::Black)));
        assert_eq!(chess_match.captured(Color::Black).len(), 1);
        assert!(chess_match.captured(Color::White).is_empty());
    }

    #[test]
    fn double_step_marks_the_pawn_for_one_half_move() {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("e2", "e4")]);
        assert_eq!(chess_match.en_passant_vulnerable(), Some(sq("e4")));
        play(&mut chess_match, &[("g8", "f6")]);
        assert_eq!(chess_match.en_passant_vulnerable(), None);
        play(&mut chess_match, &[("d2", "d3")]);
        assert_eq!(chess_match.en_passant_vulnerable(), None);
    }

    #[test]
    fn check_flag_follows_the_position() {
        let mut chess_match = ChessMatch::new();
        play(&mut chess_match, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
        assert!(chess_match.check());
        assert!(!chess_match.checkmate());
        assert_eq!(chess_match.current_player(), Color::Black);

        play(&mut chess_match, &[("g7", "g6")]);
        assert!(!chess_match.check());
    }

    #[test]
    fn fools_mate() {
        let mut chess_match = ChessMatch::new();
        play(
            &mut chess_match,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        assert!(chess_match.check());
        assert!(chess_match.checkmate());
        assert_eq!(chess_match.winner(), Some(Color::Black));
        assert_eq!(chess_match.current_player(), Color::Black);
        assert_eq!(chess_match.turn(), 4);

        assert_eq!(
            chess_match.perform_move(sq("a2"), sq("a3")),
            Err(MatchError::MatchOver)
        );
        assert_eq!(chess_match.legal_moves(), Err(MatchError::MatchOver));
    }

    #[test]
    fn en_passant_can_be_the_only_escape_from_check() {
        // Black's d-pawn double step gives check to a king boxed in by its own
        // pawns; taking it en passant is White's only reply.
        let mut builder = MatchBuilder::new()
            .piece(sq("e4"), PieceKind::King, Color::White)
            .piece(sq("e5"), PieceKind::Pawn, Color::White)
            .piece(sq("h8"), PieceKind::King, Color::Black)
            .piece(sq("d7"), PieceKind::Pawn, Color::Black)
            .piece(sq("d8"), PieceKind::Rook, Color::Black)
            .to_move(Color::Black);
        for coord in ["d3", "e3", "f3", "d4", "f4", "f5"] {
            builder = builder.piece(sq(coord), PieceKind::Pawn, Color::White);
        }
        let mut chess_match = builder.build().unwrap();

        play(&mut chess_match, &[("d7", "d5")]);
        assert!(chess_match.check());
        assert!(!chess_match.checkmate());
        let moves = chess_match.legal_moves().unwrap();
        let names: Vec<String> = moves.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["e5d6"]);
    }

    #[test]
    fn legal_moves_from_the_start() {
        let chess_match = ChessMatch::new();
        let moves = chess_match.legal_moves().unwrap();
        assert_eq!(moves.len(), 20);
        assert_eq!(chess_match, ChessMatch::new());
    }

    #[test]
    fn candidates_ignore_whose_turn_it_is() {
        let chess_match = ChessMatch::new();
        assert_eq!(chess_match.candidates(sq("b8")).count(), 2);
        assert!(chess_match.candidates(sq("e4")).is_empty());
    }

    #[test]
    #[should_panic(expected = "there is no WHITE king on the board")]
    fn missing_king_is_fatal() {
        let mut chess_match = ChessMatch::new();
        let king = chess_match.board.remove_piece(sq("e1").to_position()).unwrap();
        assert!(king.is_some());
        let _ = chess_match.test_check(Color::White);
    }
}
