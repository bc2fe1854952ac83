//! Core board types.

mod moves;
mod piece;
mod square;

pub use moves::{AppliedMove, CastleSide};
pub use piece::{Color, GameResult, Piece, PieceKind};
pub use square::Square;
