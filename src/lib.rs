//! Synchronous chess rules engine.
//!
//! Provides board representation, per-piece move generation, check, checkmate
//! and stalemate detection, castling, en passant and promotion. The crate is
//! rules-only: no search, no time-control enforcement, no I/O. A small
//! handle-based [`registry::GameRegistry`] is the boundary intended for a
//! surrounding service layer.
//!
//! # Example
//! ```
//! use chess_rules::{Clock, Game, Square};
//!
//! let mut game = Game::new(Clock::default());
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! let outcome = game.try_move(from, to).unwrap();
//! assert!(outcome.result.is_none());
//! ```

pub mod board;
pub mod game;
pub mod registry;

pub use board::{
    AppliedMove, Board, BoardBuilder, CastleSide, Color, GameResult, InvariantViolation, MoveError,
    NotationError, Piece, PieceKind, Square,
};
pub use game::{Clock, Game, MoveOutcome};
pub use registry::{GameId, GameRegistry, RegistryError};
