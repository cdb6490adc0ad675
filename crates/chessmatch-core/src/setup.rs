//! Starting positions: the standard layout and custom setups.

use tracing::debug;

use crate::board::Board;
use crate::chess_match::ChessMatch;
use crate::chess_position::ChessPosition;
use crate::color::Color;
use crate::error::SetupError;
use crate::file::File;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::rank::Rank;

/// Back-row order from file a to file h.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Builder for a [`ChessMatch`] starting position.
///
/// Pieces receive their handles in the order they are added.
///
/// ```
/// use chessmatch_core::{ChessPosition, Color, MatchBuilder, PieceKind};
///
/// let chess_match = MatchBuilder::new()
///     .piece(ChessPosition::new('e', 1)?, PieceKind::King, Color::White)
///     .piece(ChessPosition::new('e', 8)?, PieceKind::King, Color::Black)
///     .piece(ChessPosition::new('a', 1)?, PieceKind::Rook, Color::White)
///     .build()?;
/// assert!(!chess_match.check());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatchBuilder {
    placements: Vec<(ChessPosition, Piece)>,
    to_move: Color,
}

impl MatchBuilder {
    /// An empty board with White to move.
    pub fn new() -> MatchBuilder {
        MatchBuilder {
            placements: Vec::new(),
            to_move: Color::White,
        }
    }

    /// The standard 32-piece layout: White on ranks 1 and 2, Black on 7 and 8.
    pub fn standard() -> MatchBuilder {
        let mut builder = MatchBuilder::new();
        for (color, back, front) in [
            (Color::White, Rank::Rank1, Rank::Rank2),
            (Color::Black, Rank::Rank8, Rank::Rank7),
        ] {
            for (file, kind) in File::ALL.into_iter().zip(BACK_ROW) {
                builder = builder
                    .piece(ChessPosition::from_parts(file, back), kind, color)
                    .piece(ChessPosition::from_parts(file, front), PieceKind::Pawn, color);
            }
        }
        builder
    }

    /// Add an unmoved piece.
    pub fn piece(self, position: ChessPosition, kind: PieceKind, color: Color) -> MatchBuilder {
        self.moved_piece(position, kind, color, 0)
    }

    /// Add a piece that has already moved `move_count` times. A king or rook
    /// with a non-zero count can no longer castle; a pawn can no longer
    /// double-step from its starting row.
    pub fn moved_piece(
        mut self,
        position: ChessPosition,
        kind: PieceKind,
        color: Color,
        move_count: u32,
    ) -> MatchBuilder {
        let piece = Piece::new(kind, color).with_move_count(move_count);
        self.placements.push((position, piece));
        self
    }

    /// Set the side to move.
    pub fn to_move(mut self, color: Color) -> MatchBuilder {
        self.to_move = color;
        self
    }

    /// Build the match. Check and checkmate are evaluated for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::KingCount`] unless each side has exactly one king,
    /// and [`SetupError::Board`] if two pieces share a square.
    pub fn build(self) -> Result<ChessMatch, SetupError> {
        for color in Color::ALL {
            let count = self
                .placements
                .iter()
                .filter(|(_, piece)| piece.kind() == PieceKind::King && piece.color() == color)
                .count();
            if count != 1 {
                return Err(SetupError::KingCount { color, count });
            }
        }

        let mut board = Board::new();
        let mut pieces = Vec::with_capacity(self.placements.len());
        for (index, (position, piece)) in self.placements.into_iter().enumerate() {
            let id = PieceId::new(index as u8);
            board.place_piece(id, position.to_position())?;
            pieces.push(piece);
        }
        debug!(pieces = pieces.len(), to_move = %self.to_move, "match set up");

        Ok(ChessMatch::from_setup(board, pieces, self.to_move)?)
    }
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
