//! Knight candidate generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::color::Color;
use crate::move_grid::MoveGrid;
use crate::position::Position;

use super::MoveContext;

/// The eight L-shaped jumps that land on an empty or enemy square.
pub(super) fn gen_knight(ctx: &MoveContext<'_>, from: Position, us: Color) -> MoveGrid {
    let mut grid = MoveGrid::EMPTY;
    for (dr, dc) in KNIGHT_OFFSETS {
        let to = from.offset(dr, dc);
        if ctx.can_land(to, us) {
            grid.insert(to);
        }
    }
    grid
}
