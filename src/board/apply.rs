//! Move application: validation plus composite board mutation.

use super::error::MoveError;
use super::state::Board;
use super::types::{AppliedMove, CastleSide, Piece, PieceKind, Square};

impl Board {
    /// Apply a move, re-validating it against the piece's own destination
    /// set even for callers that already filtered.
    ///
    /// Commits the whole composite effect at once: capture removal
    /// (including the en-passant victim on its own row), the castling rook
    /// shift, flag updates, and promotion (`promotion` defaults to queen and
    /// must name queen, rook, bishop or knight when given). All fallible
    /// checks run before the first mutation, so an `Err` leaves the board
    /// untouched.
    pub fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<AppliedMove, MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAt { square: from })?;

        if let Some(kind) = promotion {
            if !kind.is_promotable() {
                return Err(MoveError::InvalidPromotion { kind });
            }
        }

        if !self.destinations_from(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let is_pawn = piece.kind == PieceKind::Pawn;
        let mut applied = AppliedMove::plain(from, to);

        let en_passant_victim = if is_pawn && to.col() != from.col() && self.is_empty_square(to) {
            Some(
                self.en_passant_victim(from, to)
                    .ok_or(MoveError::IllegalDestination { from, to })?,
            )
        } else {
            None
        };

        let castle = if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let side = if to.col() > from.col() {
                CastleSide::King
            } else {
                CastleSide::Queen
            };
            let rook_from = Square(from.row(), side.rook_col());
            if self.piece_at(rook_from).is_none() {
                return Err(MoveError::IllegalDestination { from, to });
            }
            let rook_to = Square(from.row(), (from.col() + to.col()) / 2);
            Some((side, rook_from, rook_to))
        } else {
            None
        };

        // Validation done; commit.
        if let Some(victim_sq) = en_passant_victim {
            let _ = self.take_piece(victim_sq);
            applied.captured = Some(PieceKind::Pawn);
            applied.en_passant = true;
        }

        if let Some((side, rook_from, rook_to)) = castle {
            if let Some(mut rook) = self.take_piece(rook_from) {
                rook.has_moved = true;
                self.set_piece(rook_to, rook);
            }
            applied.castled = Some(side);
        }

        if let Some(victim) = self.piece_at(to) {
            applied.captured = Some(victim.kind);
        }

        let _ = self.take_piece(from);
        let mut moved = piece;
        moved.has_moved = true;
        moved.en_passant_capturable = is_pawn && from.row().abs_diff(to.row()) == 2;

        if is_pawn && to.row() == piece.color.promotion_row() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            moved = Piece {
                color: piece.color,
                kind,
                has_moved: true,
                en_passant_capturable: false,
            };
            applied.promoted_to = Some(kind);
        }

        self.set_piece(to, moved);
        Ok(applied)
    }
}
