//! Sliding piece (bishop, rook, queen) candidate generation.

use crate::color::Color;
use crate::move_grid::MoveGrid;
use crate::position::Position;

use super::MoveContext;

/// Slide along each direction until blocked. The blocking square is a
/// candidate only when an enemy stands on it.
pub(super) fn gen_slider(
    ctx: &MoveContext<'_>,
    from: Position,
    us: Color,
    directions: &[(i8, i8)],
) -> MoveGrid {
    let mut grid = MoveGrid::EMPTY;
    for &(dr, dc) in directions {
        let mut to = from.offset(dr, dc);
        while ctx.is_empty(to) {
            grid.insert(to);
            to = to.offset(dr, dc);
        }
        if ctx.is_enemy(to, us) {
            grid.insert(to);
        }
    }
    grid
}
