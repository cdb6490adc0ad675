//! Pawn candidate generation.

use crate::color::Color;
use crate::move_grid::MoveGrid;
use crate::position::Position;

use super::MoveContext;

/// Forward steps, diagonal captures and en passant.
///
/// The double step is only offered from the pawn's starting row with both
/// squares empty. En passant targets the empty square behind the
/// currently vulnerable enemy pawn when that pawn stands right beside us.
pub(super) fn gen_pawn(ctx: &MoveContext<'_>, from: Position, us: Color) -> MoveGrid {
    let mut grid = MoveGrid::EMPTY;
    let forward = us.forward();

    let single = from.offset(forward, 0);
    if ctx.is_empty(single) {
        grid.insert(single);
        let double = from.offset(2 * forward, 0);
        if from.row() == us.pawn_row() && ctx.is_empty(double) {
            grid.insert(double);
        }
    }

    for side in [-1, 1] {
        let diagonal = from.offset(forward, side);
        if ctx.is_enemy(diagonal, us) {
            grid.insert(diagonal);
        }

        let beside = from.offset(0, side);
        if let Some(vulnerable) = ctx.en_passant
            && ctx.board.occupant(beside) == Some(vulnerable)
            && ctx.is_enemy(beside, us)
            && ctx.is_empty(diagonal)
        {
            grid.insert(diagonal);
        }
    }

    grid
}
