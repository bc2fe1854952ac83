//! Board state: an 8x8 grid of optional piece descriptors.

use std::fmt;

use super::types::{Color, Piece, PieceKind, Square};

/// An 8x8 chess board.
///
/// Pure placement structure: it knows which piece occupies which square and
/// nothing about whose turn it is. Row 0 is rank 8, so black's pieces start
/// on rows 0-1 and white's on rows 6-7. Clones are cheap (the grid holds
/// only `Copy` descriptors), which the legality filter in
/// [`crate::game::Game`] relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Create a board in the standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_row.iter().enumerate() {
            board.set_piece(Square(0, col), Piece::new(Color::Black, kind));
            board.set_piece(Square(1, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.set_piece(Square(6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(7, col), Piece::new(Color::White, kind));
        }
        board
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    /// Returns true if the square is unoccupied
    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if the square holds a piece of the given color
    #[inline]
    #[must_use]
    pub fn is_color_at(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Place a piece on a square, replacing any occupant
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some(piece);
    }

    /// Remove and return the occupant of a square
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Iterate over all occupied squares
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                let sq = Square(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    /// Locate the king of a color
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Clear the en-passant flag on every pawn of a color.
    ///
    /// Called by the game when that color's capture window closes.
    pub(crate) fn clear_en_passant_flags(&mut self, color: Color) {
        for row in &mut self.squares {
            for slot in row.iter_mut() {
                if let Some(piece) = slot {
                    if piece.color == color && piece.kind == PieceKind::Pawn {
                        piece.en_passant_capturable = false;
                    }
                }
            }
        }
    }

    /// Character grid for display: uppercase white, lowercase black, space
    /// for empty. Row 0 of the grid is rank 8.
    #[must_use]
    pub fn render(&self) -> [[char; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| match self.squares[row][col] {
                Some(piece) => piece.symbol(),
                None => ' ',
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rendered) in self.render().iter().enumerate() {
            write!(f, "{}|", 8 - row)?;
            for (col, symbol) in rendered.iter().enumerate() {
                let sep = if col == 7 { '\n' } else { ' ' };
                write!(f, "{symbol}{sep}")?;
            }
        }
        write!(f, "  a b c d e f g h")
    }
}
