//! Applied-move description types.

use std::fmt;

use super::piece::PieceKind;
use super::square::Square;

/// Side of the board a castling move happens on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    King,
    Queen,
}

/// What a successfully applied move did to the board.
///
/// Returned by [`crate::board::Board::apply`] so callers and tests can see
/// composite effects (captures, en passant, castling, promotion) without
/// diffing board states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// Kind of the captured piece, if any (en passant included)
    pub captured: Option<PieceKind>,
    /// The capture was en passant; the victim stood beside the destination
    pub en_passant: bool,
    /// The move was a castle on this side
    pub castled: Option<CastleSide>,
    /// The pawn promoted to this kind
    pub promoted_to: Option<PieceKind>,
}

impl AppliedMove {
    pub(crate) const fn plain(from: Square, to: Square) -> Self {
        AppliedMove {
            from,
            to,
            captured: None,
            en_passant: false,
            castled: None,
            promoted_to: None,
        }
    }

    /// Returns true if any piece was captured
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promoted_to {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_move_display() {
        let mv = AppliedMove::plain(Square(6, 4), Square(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_promotion_display() {
        let mut mv = AppliedMove::plain(Square(1, 0), Square(0, 0));
        mv.promoted_to = Some(PieceKind::Queen);
        assert_eq!(mv.to_string(), "a7a8q");
    }
}
