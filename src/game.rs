//! Game turn state machine.
//!
//! Owns a [`Board`], whose turn it is, a redundant king-location cache, and
//! the terminal result. Legality filtering is copy-simulate-discard: every
//! candidate move is applied to a clone of the board and dropped if it
//! leaves the mover's own king attacked. Composite moves (castling,
//! en passant, promotion) change several squares at once, so simulating on
//! an independent copy avoids partial-undo bugs entirely.

use std::time::Duration;

use log::{debug, info};

use crate::board::{
    AppliedMove, Board, Color, GameResult, InvariantViolation, MoveError, PieceKind, Square,
};

/// Match clock bookkeeping.
///
/// The engine stores and updates these values on request but never enforces
/// them; flag falls are the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    pub white_remaining: Duration,
    pub black_remaining: Duration,
    pub increment: Duration,
}

impl Clock {
    /// Create a clock with the same main time for both sides
    #[must_use]
    pub const fn new(main_time: Duration, increment: Duration) -> Self {
        Clock {
            white_remaining: main_time,
            black_remaining: main_time,
            increment,
        }
    }

    /// Deduct elapsed thinking time for a color and credit the increment
    pub fn charge(&mut self, color: Color, elapsed: Duration) {
        let remaining = match color {
            Color::White => &mut self.white_remaining,
            Color::Black => &mut self.black_remaining,
        };
        *remaining = remaining.saturating_sub(elapsed) + self.increment;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new(Duration::from_secs(600), Duration::ZERO)
    }
}

/// Result of a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// What the move did to the board
    pub details: AppliedMove,
    /// Set when this move ended the game
    pub result: Option<GameResult>,
}

/// A single chess match.
///
/// Mutated by exactly one caller at a time; wrap it (or the
/// [`crate::registry::GameRegistry`]) in a lock when sharing across threads.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    white_king: Square,
    black_king: Square,
    result: Option<GameResult>,
    clock: Clock,
}

impl Game {
    /// Start a game from the standard position, white to move
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            result: None,
            clock,
        }
    }

    /// Start a game from an arbitrary position.
    ///
    /// Fails if either king is missing. The position is immediately checked
    /// for game end, so a constructed mate or stalemate is terminal at once.
    pub fn with_board(board: Board, turn: Color, clock: Clock) -> Result<Self, InvariantViolation> {
        let white_king = board
            .find_king(Color::White)
            .ok_or(InvariantViolation::KingMissing { color: Color::White })?;
        let black_king = board
            .find_king(Color::Black)
            .ok_or(InvariantViolation::KingMissing { color: Color::Black })?;
        let mut game = Game {
            board,
            turn,
            white_king,
            black_king,
            result: None,
            clock,
        };
        game.evaluate_game_end();
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Terminal result, if the game has ended
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Returns true if the given color's king is currently attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    const fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn verify_king_cache(&self) -> Result<(), InvariantViolation> {
        for color in Color::BOTH {
            let cached = self.king_square(color);
            let holds_king = self
                .board
                .piece_at(cached)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::King);
            if !holds_king {
                return Err(InvariantViolation::KingCacheMismatch { color, cached });
            }
        }
        Ok(())
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Rejects empty squares, pieces of the side not on move, and any query
    /// once the game has ended.
    pub fn possible_moves(&self, from: Square) -> Result<Vec<Square>, MoveError> {
        if let Some(result) = self.result {
            return Err(MoveError::GameOver { result });
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn {
                square: from,
                color: piece.color,
            });
        }
        Ok(self.legal_destinations(from, piece.kind, piece.color))
    }

    /// Filter pseudo-legal destinations by simulating each candidate on a
    /// board clone and dropping those that leave the own king attacked.
    fn legal_destinations(&self, from: Square, kind: PieceKind, color: Color) -> Vec<Square> {
        self.board
            .destinations_from(from)
            .into_iter()
            .filter(|&to| {
                let mut sim = self.board.clone();
                if sim.apply(from, to, None).is_err() {
                    return false;
                }
                let king_sq = if kind == PieceKind::King {
                    to
                } else {
                    self.king_square(color)
                };
                !sim.is_square_attacked(king_sq, color.opponent())
            })
            .collect()
    }

    /// Apply a move, auto-promoting to queen when a pawn reaches the far row
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.try_move_with_promotion(from, to, None)
    }

    /// Apply a move with an explicit promotion choice.
    ///
    /// Re-validates through [`Self::possible_moves`], applies on a working
    /// copy and commits only on success, maintains the king cache, closes
    /// the opponent's en-passant window, flips the turn and evaluates game
    /// end. The state is unchanged on any `Err`.
    pub fn try_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, MoveError> {
        if let Some(result) = self.result {
            return Err(MoveError::GameOver { result });
        }
        let mover = self.turn;
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color != mover {
            return Err(MoveError::NotYourTurn {
                square: from,
                color: piece.color,
            });
        }
        if !self
            .legal_destinations(from, piece.kind, piece.color)
            .contains(&to)
        {
            return Err(MoveError::IllegalDestination { from, to });
        }
        self.verify_king_cache()?;

        // Copy-then-commit: a failing apply leaves the live board intact.
        let mut working = self.board.clone();
        let applied = working.apply(from, to, promotion)?;
        self.board = working;

        if piece.kind == PieceKind::King {
            match mover {
                Color::White => self.white_king = to,
                Color::Black => self.black_king = to,
            }
        }

        // The opponent's double-push window expired with this reply.
        self.board.clear_en_passant_flags(mover.opponent());

        debug!("{mover} played {applied}");
        self.turn = mover.opponent();
        self.evaluate_game_end();

        Ok(MoveOutcome {
            details: applied,
            result: self.result,
        })
    }

    /// Returns true if `color` has at least one legal move anywhere
    fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .occupied()
            .filter(|(_, piece)| piece.color == color)
            .any(|(from, piece)| !self.legal_destinations(from, piece.kind, color).is_empty())
    }

    /// Checkmate/stalemate detection for the side to move
    fn evaluate_game_end(&mut self) {
        if self.result.is_some() || self.has_any_legal_move(self.turn) {
            return;
        }
        let result = if self.board.is_in_check(self.turn) {
            GameResult::win_for(self.turn.opponent())
        } else {
            GameResult::Draw
        };
        info!("game over: {result}");
        self.result = Some(result);
    }
}
