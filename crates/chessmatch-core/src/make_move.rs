//! Reversible move execution, shared by real moves and simulations.
//!
//! [`ChessMatch::execute`] returns a [`MoveRecord`] holding every mutation it
//! made; [`ChessMatch::undo`] applies the exact inverse of that record. Self
//! check rejection, checkmate simulation and legal-move listing all go through
//! this one pair, so a simulated move can never leave a trace.

use crate::chess_match::ChessMatch;
use crate::error::BoardError;
use crate::movegen::king::{KING_SIDE_ROOK, QUEEN_SIDE_ROOK};
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A piece removed from the board by a move, and where it stood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Capture {
    pub(crate) id: PieceId,
    pub(crate) position: Position,
}

/// The rook relocation that accompanies castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RookShift {
    pub(crate) id: PieceId,
    pub(crate) from: Position,
    pub(crate) to: Position,
}

/// Everything [`ChessMatch::execute`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveRecord {
    pub(crate) source: Position,
    pub(crate) target: Position,
    pub(crate) moved: PieceId,
    pub(crate) captured: Option<Capture>,
    pub(crate) rook: Option<RookShift>,
}

impl MoveRecord {
    /// Return `true` if the move was a two-row pawn advance.
    pub(crate) fn is_double_step(&self, kind: PieceKind) -> bool {
        kind == PieceKind::Pawn && (self.target.row() - self.source.row()).abs() == 2
    }
}

impl ChessMatch {
    /// Move the piece on `source` to `target` with all side effects: capture,
    /// the castling rook, and the pawn taken en passant.
    ///
    /// No legality checks happen here; callers validate first.
    pub(crate) fn execute(
        &mut self,
        source: Position,
        target: Position,
    ) -> Result<MoveRecord, BoardError> {
        let moved = self.board.remove_piece(source)?.ok_or(BoardError::Vacant {
            row: source.row(),
            column: source.column(),
        })?;
        self.pieces[moved.index()].increase_move_count();
        let mut captured = self
            .board
            .remove_piece(target)?
            .map(|id| Capture { id, position: target });
        self.board.place_piece(moved, target)?;

        let kind = self.pieces[moved.index()].kind();
        let columns = target.column() - source.column();

        // Castling: the king travels two columns, the rook jumps to its far side.
        let mut rook = None;
        if kind == PieceKind::King && columns.abs() == 2 {
            let step = columns.signum();
            let rook_offset = if step > 0 { KING_SIDE_ROOK } else { QUEEN_SIDE_ROOK };
            let from = source.offset(0, rook_offset);
            let to = source.offset(0, step);
            let id = self.board.remove_piece(from)?.ok_or(BoardError::Vacant {
                row: from.row(),
                column: from.column(),
            })?;
            self.board.place_piece(id, to)?;
            self.pieces[id.index()].increase_move_count();
            rook = Some(RookShift { id, from, to });
        }

        // En passant: a diagonal pawn move onto an empty square takes the pawn
        // beside the source, on the destination's column.
        if kind == PieceKind::Pawn && columns != 0 && captured.is_none() {
            let behind = Position::new(source.row(), target.column());
            captured = self
                .board
                .remove_piece(behind)?
                .map(|id| Capture { id, position: behind });
        }

        if let Some(capture) = captured {
            self.captured.push(capture.id);
        }

        Ok(MoveRecord {
            source,
            target,
            moved,
            captured,
            rook,
        })
    }

    /// Reverse a move made by [`ChessMatch::execute`]. Records must be undone
    /// in the reverse order they were made.
    pub(crate) fn undo(&mut self, record: MoveRecord) -> Result<(), BoardError> {
        if let Some(shift) = record.rook {
            self.board.remove_piece(shift.to)?;
            self.board.place_piece(shift.id, shift.from)?;
            self.pieces[shift.id.index()].decrease_move_count();
        }

        self.board.remove_piece(record.target)?;
        self.board.place_piece(record.moved, record.source)?;
        self.pieces[record.moved.index()].decrease_move_count();

        if let Some(capture) = record.captured {
            let restored = self.captured.pop();
            debug_assert_eq!(restored, Some(capture.id), "captures undone out of order");
            self.board.place_piece(capture.id, capture.position)?;
        }
        Ok(())
    }
}
