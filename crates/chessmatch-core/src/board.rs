//! The 8×8 grid: bounds-checked piece placement, removal and lookup.

use crate::error::BoardError;
use crate::piece::PieceId;
use crate::position::Position;

/// Piece occupancy of the 64 cells.
///
/// Cells hold [`PieceId`] handles. The board also keeps the reverse index
/// (handle to position) so a piece can be located without scanning the grid.
/// There are no chess rules here, only grid mechanics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; 8]; 8],
    locations: Vec<Option<Position>>,
}

impl Board {
    /// Number of rows.
    pub const ROWS: usize = 8;

    /// Number of columns.
    pub const COLUMNS: usize = 8;

    /// Create an empty board.
    pub fn new() -> Board {
        Board {
            cells: [[None; Self::COLUMNS]; Self::ROWS],
            locations: Vec::new(),
        }
    }

    /// Return `true` if `position` is inside the grid.
    #[inline]
    pub fn position_exists(&self, position: Position) -> bool {
        position.is_on_board()
    }

    /// Return the handle on `position`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `position` is off the grid.
    pub fn piece(&self, position: Position) -> Result<Option<PieceId>, BoardError> {
        self.check_bounds(position)?;
        Ok(self.cell(position))
    }

    /// Return `true` if a piece stands on `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `position` is off the grid.
    pub fn there_is_a_piece(&self, position: Position) -> Result<bool, BoardError> {
        Ok(self.piece(position)?.is_some())
    }

    /// Put `id` on `position`.
    ///
    /// # Errors
    ///
    /// Fails if `position` is off the grid, already occupied, or if `id` is
    /// already standing somewhere else.
    pub fn place_piece(&mut self, id: PieceId, position: Position) -> Result<(), BoardError> {
        self.check_bounds(position)?;
        if self.cell(position).is_some() {
            return Err(BoardError::Occupied {
                row: position.row(),
                column: position.column(),
            });
        }
        if self.position_of(id).is_some() {
            return Err(BoardError::AlreadyPlaced { index: id.index() });
        }

        if self.locations.len() <= id.index() {
            self.locations.resize(id.index() + 1, None);
        }
        self.locations[id.index()] = Some(position);
        self.cells[position.row() as usize][position.column() as usize] = Some(id);
        Ok(())
    }

    /// Clear `position` and return its former occupant, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `position` is off the grid.
    pub fn remove_piece(&mut self, position: Position) -> Result<Option<PieceId>, BoardError> {
        self.check_bounds(position)?;
        let removed = self.cells[position.row() as usize][position.column() as usize].take();
        if let Some(id) = removed {
            self.locations[id.index()] = None;
        }
        Ok(removed)
    }

    /// Return where `id` stands, or `None` if it is not on the board.
    #[inline]
    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.locations.get(id.index()).copied().flatten()
    }

    /// Return the occupant of `position`, treating off-board as empty.
    #[inline]
    pub(crate) fn occupant(&self, position: Position) -> Option<PieceId> {
        if position.is_on_board() {
            self.cell(position)
        } else {
            None
        }
    }

    /// Iterate over every occupied cell in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, PieceId)> + '_ {
        Position::all().filter_map(|pos| self.cell(pos).map(|id| (pos, id)))
    }

    #[inline]
    fn cell(&self, position: Position) -> Option<PieceId> {
        self.cells[position.row() as usize][position.column() as usize]
    }

    fn check_bounds(&self, position: Position) -> Result<(), BoardError> {
        if self.position_exists(position) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: position.row(),
                column: position.column(),
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
