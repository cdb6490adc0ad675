//! King candidate generation, castling included.

use crate::attacks::{KING_OFFSETS, is_attacked};
use crate::color::Color;
use crate::move_grid::MoveGrid;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveContext;

/// Grid column both kings start on (file e).
const KING_HOME_COLUMN: i8 = 4;

/// Column offset from the king to the king-side rook.
pub(crate) const KING_SIDE_ROOK: i8 = 3;

/// Column offset from the king to the queen-side rook.
pub(crate) const QUEEN_SIDE_ROOK: i8 = -4;

/// Adjacent squares that are empty or enemy-held, plus castling.
pub(super) fn gen_king(ctx: &MoveContext<'_>, from: Position, king: Piece) -> MoveGrid {
    let us = king.color();
    let mut grid = MoveGrid::EMPTY;

    for (dr, dc) in KING_OFFSETS {
        let to = from.offset(dr, dc);
        if ctx.can_land(to, us) {
            grid.insert(to);
        }
    }

    // Castling: only from the home square, never out of check.
    let at_home = from.row() == us.back_row() && from.column() == KING_HOME_COLUMN;
    if at_home && king.move_count() == 0 && !is_attacked(ctx, from, us.flip()) {
        for rook_offset in [KING_SIDE_ROOK, QUEEN_SIDE_ROOK] {
            if can_castle(ctx, from, us, rook_offset) {
                grid.insert(from.offset(0, 2 * rook_offset.signum()));
            }
        }
    }

    grid
}

/// The rook `rook_offset` columns away is ours and unmoved, every square
/// between is empty, and the two squares the king crosses are not attacked.
fn can_castle(ctx: &MoveContext<'_>, from: Position, us: Color, rook_offset: i8) -> bool {
    let Some((_, rook)) = ctx.piece_at(from.offset(0, rook_offset)) else {
        return false;
    };
    if rook.kind() != PieceKind::Rook || rook.color() != us || rook.move_count() != 0 {
        return false;
    }

    let step = rook_offset.signum();
    let mut column = step;
    while column != rook_offset {
        if !ctx.is_empty(from.offset(0, column)) {
            return false;
        }
        column += step;
    }

    let them = us.flip();
    !is_attacked(ctx, from.offset(0, step), them) && !is_attacked(ctx, from.offset(0, 2 * step), them)
}
