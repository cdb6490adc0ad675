//! Candidate move generation: the squares a piece could reach, ignoring self-check.

pub(crate) mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::Board;
use crate::color::Color;
use crate::move_grid::MoveGrid;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// The read-only match state a generation call needs, rebuilt per call.
///
/// Pieces never hold a reference back to the match; everything match-wide
/// (the en-passant-vulnerable pawn, other pieces' move counts) comes in here.
#[derive(Clone, Copy)]
pub(crate) struct MoveContext<'a> {
    pub(crate) board: &'a Board,
    pub(crate) pieces: &'a [Piece],
    pub(crate) en_passant: Option<PieceId>,
}

impl MoveContext<'_> {
    /// Return the handle and piece on `position`, if any.
    #[inline]
    pub(crate) fn piece_at(&self, position: Position) -> Option<(PieceId, Piece)> {
        self.board
            .occupant(position)
            .map(|id| (id, self.pieces[id.index()]))
    }

    /// On the board and unoccupied.
    #[inline]
    pub(crate) fn is_empty(&self, position: Position) -> bool {
        position.is_on_board() && self.board.occupant(position).is_none()
    }

    /// Occupied by a piece of the color opposing `us`.
    #[inline]
    pub(crate) fn is_enemy(&self, position: Position, us: Color) -> bool {
        self.piece_at(position)
            .is_some_and(|(_, piece)| piece.color() != us)
    }

    /// Empty or enemy-occupied: somewhere a non-pawn of color `us` may land.
    #[inline]
    pub(crate) fn can_land(&self, position: Position, us: Color) -> bool {
        self.is_empty(position) || self.is_enemy(position, us)
    }

    /// Occupied by a piece of exactly this kind and color.
    #[inline]
    pub(crate) fn holds(&self, position: Position, kind: PieceKind, color: Color) -> bool {
        self.piece_at(position)
            .is_some_and(|(_, piece)| piece.kind() == kind && piece.color() == color)
    }
}

/// Return the candidate squares of piece `id`, or an empty grid if it is not
/// on the board.
pub(crate) fn possible_moves(ctx: &MoveContext<'_>, id: PieceId) -> MoveGrid {
    let Some(from) = ctx.board.position_of(id) else {
        return MoveGrid::EMPTY;
    };
    let piece = ctx.pieces[id.index()];
    let us = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(ctx, from, us),
        PieceKind::Knight => gen_knight(ctx, from, us),
        PieceKind::Bishop => gen_slider(ctx, from, us, &BISHOP_DIRECTIONS),
        PieceKind::Rook => gen_slider(ctx, from, us, &ROOK_DIRECTIONS),
        PieceKind::Queen => gen_slider(ctx, from, us, &QUEEN_DIRECTIONS),
        PieceKind::King => gen_king(ctx, from, piece),
    }
}
