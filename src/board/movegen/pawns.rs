use super::super::state::Board;
use super::super::types::{Color, PieceKind, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.forward();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                moves.push(forward);

                if from.row() == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty_square(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if self.is_color_at(target, color.opponent()) {
                moves.push(target);
            } else if self.is_empty_square(target) && self.en_passant_victim(from, target).is_some()
            {
                moves.push(target);
            }
        }

        moves
    }

    /// The opposing pawn an en-passant move onto `target` would remove.
    ///
    /// The victim sits beside the capturing pawn, on the capturer's row and
    /// the target's column, and must carry the one-half-move window flag.
    pub(crate) fn en_passant_victim(&self, from: Square, target: Square) -> Option<Square> {
        let capturer = self.piece_at(from)?;
        if capturer.kind != PieceKind::Pawn || target.col() == from.col() {
            return None;
        }
        let victim_sq = Square(from.row(), target.col());
        let victim = self.piece_at(victim_sq)?;
        // A double push lands two rows past the victim's start row; the
        // capture is only valid from that rank.
        let landing_row = victim
            .color
            .pawn_start_row()
            .checked_add_signed(2 * victim.color.forward())?;
        if victim.kind == PieceKind::Pawn
            && victim.color == capturer.color.opponent()
            && victim.en_passant_capturable
            && victim_sq.row() == landing_row
        {
            Some(victim_sq)
        } else {
            None
        }
    }
}
