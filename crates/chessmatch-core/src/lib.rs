//! Core chess types: board representation, move generation, and match rules.

mod attacks;
mod board;
mod chess_match;
mod chess_move;
mod chess_position;
mod color;
mod error;
mod file;
mod make_move;
mod move_grid;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod setup;

pub use board::Board;
pub use chess_match::ChessMatch;
pub use chess_move::Move;
pub use chess_position::ChessPosition;
pub use color::Color;
pub use error::{BoardError, CoordinateError, MatchError, SetupError};
pub use file::File;
pub use move_grid::MoveGrid;
pub use perft::{divide, perft};
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use position::Position;
pub use rank::Rank;
pub use setup::MatchBuilder;
