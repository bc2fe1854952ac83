//! King moves, the attack scan and castling preconditions.

use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::state::Board;
use super::super::types::{CastleSide, Color, PieceKind, Square};
use super::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};

impl CastleSide {
    /// Column the participating rook starts on
    pub(crate) const fn rook_col(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column delta of the king's two-square jump
    pub(crate) const fn king_step(self) -> isize {
        match self {
            CastleSide::King => 2,
            CastleSide::Queen => -2,
        }
    }
}

impl Board {
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let opponent = color.opponent();
        let mut moves: Vec<Square> = KING_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&sq| !self.is_color_at(sq, color) && !self.is_square_attacked(sq, opponent))
            .collect();

        for side in [CastleSide::King, CastleSide::Queen] {
            if self.can_castle(from, color, side) {
                if let Some(to) = from.offset(0, side.king_step()) {
                    moves.push(to);
                }
            }
        }

        moves
    }

    /// Castling preconditions for the king on `from`:
    /// an unmoved king, an unmoved same-color rook on the corner, empty
    /// squares strictly between them, and no attacked square on the
    /// inclusive origin-to-destination span.
    pub(crate) fn can_castle(&self, from: Square, color: Color, side: CastleSide) -> bool {
        let Some(king) = self.piece_at(from) else {
            return false;
        };
        if king.kind != PieceKind::King || king.has_moved {
            return false;
        }
        // An unmoved king stands on the e-file of its back row; constructed
        // positions that place it elsewhere get no castling rights.
        if from != Square(color.back_row(), 4) {
            return false;
        }

        let row = from.row();
        let rook_sq = Square(row, side.rook_col());
        let rook_ok = self.piece_at(rook_sq).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
        });
        if !rook_ok {
            return false;
        }

        let (lo, hi) = if from.col() < rook_sq.col() {
            (from.col(), rook_sq.col())
        } else {
            (rook_sq.col(), from.col())
        };
        for col in lo + 1..hi {
            if !self.is_empty_square(Square(row, col)) {
                return false;
            }
        }

        // Inclusive 3-square span: origin, transit and destination must all
        // be safe, which also covers "not currently in check".
        let opponent = color.opponent();
        let step = side.king_step().signum();
        for i in 0..=2 {
            let Some(sq) = from.offset(0, step * i) else {
                return false;
            };
            if self.is_square_attacked(sq, opponent) {
                return false;
            }
        }

        true
    }

    /// Returns true if any piece of `by` attacks `target`.
    ///
    /// Uses raw geometric reachability only: pawn capture diagonals, table
    /// lookups for knights and kings, ray walks for sliders. Never consults
    /// the attack-aware king generator, so it cannot recurse.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.occupied()
            .filter(|(_, piece)| piece.color == by)
            .any(|(from, piece)| self.attacks(from, piece.kind, target))
    }

    fn attacks(&self, from: Square, kind: PieceKind, target: Square) -> bool {
        match kind {
            PieceKind::Pawn => {
                let Some(attacker) = self.piece_at(from) else {
                    return false;
                };
                let dir = attacker.color.forward();
                from.offset(dir, -1) == Some(target) || from.offset(dir, 1) == Some(target)
            }
            PieceKind::Knight => KNIGHT_TARGETS[from.index()].contains(&target),
            PieceKind::King => KING_TARGETS[from.index()].contains(&target),
            PieceKind::Bishop => self.ray_reaches(from, target, &DIAGONAL_DIRS),
            PieceKind::Rook => self.ray_reaches(from, target, &ORTHOGONAL_DIRS),
            PieceKind::Queen => {
                self.ray_reaches(from, target, &ORTHOGONAL_DIRS)
                    || self.ray_reaches(from, target, &DIAGONAL_DIRS)
            }
        }
    }

    /// Returns true if the given color's king is attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
