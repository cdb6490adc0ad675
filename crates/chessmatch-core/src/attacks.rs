//! Move offset tables and square-attack detection.

use crate::color::Color;
use crate::movegen::MoveContext;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Orthogonal slide directions as (row, column) deltas.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal slide directions.
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal and diagonal slide directions.
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

/// The eight L-shaped knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// The eight adjacent squares.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Return `true` if `target` is attacked by any piece of color `by`.
///
/// Uses reverse lookup: each attack pattern is cast from `target` and checked
/// for a matching attacker. Pawns attack their forward diagonals whether or
/// not something stands there, and kings attack only adjacent squares
/// (castling never captures), so this never recurses into king generation.
/// For an occupied `target` the answer equals "some piece of `by` has
/// `target` among its candidates".
pub(crate) fn is_attacked(ctx: &MoveContext<'_>, target: Position, by: Color) -> bool {
    // A pawn of `by` attacks from one row behind the target, seen from its side.
    let pawn_row = -by.forward();
    if [-1, 1]
        .into_iter()
        .any(|side| ctx.holds(target.offset(pawn_row, side), PieceKind::Pawn, by))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .into_iter()
        .any(|(dr, dc)| ctx.holds(target.offset(dr, dc), PieceKind::Knight, by))
    {
        return true;
    }

    if KING_OFFSETS
        .into_iter()
        .any(|(dr, dc)| ctx.holds(target.offset(dr, dc), PieceKind::King, by))
    {
        return true;
    }

    slider_attacks(ctx, target, by, &ROOK_DIRECTIONS, PieceKind::Rook)
        || slider_attacks(ctx, target, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

/// Walk each direction to the first occupied square and test for a slider of
/// `by` that moves along it (`kind` or a queen).
fn slider_attacks(
    ctx: &MoveContext<'_>,
    target: Position,
    by: Color,
    directions: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    directions.iter().any(|&(dr, dc)| {
        let mut pos = target.offset(dr, dc);
        while ctx.is_empty(pos) {
            pos = pos.offset(dr, dc);
        }
        ctx.holds(pos, kind, by) || ctx.holds(pos, PieceKind::Queen, by)
    })
}
