//! Chess board representation and move generation.
//!
//! The board is an 8x8 grid of optional piece descriptors. Move generation is
//! pseudo-legal: consistent with piece geometry and occupancy, but not
//! filtered for leaving the mover's own king in check. The own-king-safety
//! filter lives in [`crate::game::Game`], which simulates candidate moves on
//! a board clone.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(board.destinations_from(e2).len(), 2);
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{InvariantViolation, MoveError, NotationError};
pub use state::Board;
pub use types::{AppliedMove, CastleSide, Color, GameResult, Piece, PieceKind, Square};
