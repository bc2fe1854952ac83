//! Pseudo-legal move generation.
//!
//! Destinations are consistent with piece geometry and occupancy but not yet
//! filtered for own-king safety; that filter is the game's job. The king
//! generator is the one exception: it already refuses squares the opponent
//! attacks, and appends castling candidates.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};

use super::state::Board;
use super::types::{PieceKind, Square};

impl Board {
    /// Pseudo-legal destinations for the piece on `from`.
    ///
    /// Empty squares produce an empty list; turn order is not checked here.
    #[must_use]
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
            PieceKind::Knight => self.knight_destinations(from, piece.color),
            PieceKind::Bishop => self.ray_destinations(from, piece.color, &DIAGONAL_DIRS),
            PieceKind::Rook => self.ray_destinations(from, piece.color, &ORTHOGONAL_DIRS),
            PieceKind::Queen => {
                let mut moves = self.ray_destinations(from, piece.color, &ORTHOGONAL_DIRS);
                moves.extend(self.ray_destinations(from, piece.color, &DIAGONAL_DIRS));
                moves
            }
            PieceKind::King => self.king_destinations(from, piece.color),
        }
    }
}
