use super::super::state::Board;
use super::super::types::{Color, Square};

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Ray-cast destinations: empty squares extend the ray, the first
    /// opponent-occupied square ends it inclusively, an own piece ends it
    /// exclusively.
    pub(crate) fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in dirs {
            let mut cursor = from;
            while let Some(sq) = cursor.offset(dr, dc) {
                match self.piece_at(sq) {
                    None => moves.push(sq),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(sq);
                        }
                        break;
                    }
                }
                cursor = sq;
            }
        }
        moves
    }

    /// Returns true if a ray from `from` reaches `target` before hitting any
    /// other occupied square. Used by the attack scan; occupancy of the
    /// target itself does not block.
    pub(crate) fn ray_reaches(
        &self,
        from: Square,
        target: Square,
        dirs: &[(isize, isize)],
    ) -> bool {
        for &(dr, dc) in dirs {
            let mut cursor = from;
            while let Some(sq) = cursor.offset(dr, dc) {
                if sq == target {
                    return true;
                }
                if !self.is_empty_square(sq) {
                    break;
                }
                cursor = sq;
            }
        }
        false
    }
}
