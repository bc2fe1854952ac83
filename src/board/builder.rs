//! Fluent builder for constructing chess positions.
//!
//! Lets tests set up positions piece by piece instead of scripting moves.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .build();
//! ```

use super::state::Board;
use super::types::{Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a pristine piece (flags clear) on a square
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(color, kind))
    }

    /// Place a piece whose `has_moved` flag is already set
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(color, kind);
        piece.has_moved = true;
        self.place(square, piece)
    }

    /// Place a pawn that is capturable en passant on this half-move
    #[must_use]
    pub fn en_passant_pawn(self, square: Square, color: Color) -> Self {
        let mut pawn = Piece::new(color, PieceKind::Pawn);
        pawn.has_moved = true;
        pawn.en_passant_capturable = true;
        self.place(square, pawn)
    }

    /// Place an arbitrary piece descriptor
    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
