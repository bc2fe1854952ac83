use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::state::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&sq| !self.is_color_at(sq, color))
            .collect()
    }
}
