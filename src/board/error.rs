//! Error types for board and game operations.

use std::fmt;

use super::types::{Color, GameResult, PieceKind, Square};

/// Error type for malformed algebraic square notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation must be exactly two characters, e.g. "e4"
    InvalidLength { len: usize },
    /// File character outside 'a'..='h'
    InvalidFile { ch: char },
    /// Rank character outside '1'..='8'
    InvalidRank { ch: char },
    /// Raw indices outside the 8x8 board
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidLength { len } => {
                write!(f, "Square notation must be 2 characters, found {len}")
            }
            NotationError::InvalidFile { ch } => {
                write!(f, "Invalid file character '{ch}', expected 'a'-'h'")
            }
            NotationError::InvalidRank { ch } => {
                write!(f, "Invalid rank character '{ch}', expected '1'-'8'")
            }
            NotationError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) is outside the board")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for rejected moves. The game state is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    NoPieceAt { square: Square },
    /// Source piece belongs to the side not on move
    NotYourTurn { square: Square, color: Color },
    /// Destination is not in the piece's legal-destination set
    IllegalDestination { from: Square, to: Square },
    /// Promotion choice is not one of queen, rook, bishop or knight
    InvalidPromotion { kind: PieceKind },
    /// The game already ended; no further moves are accepted
    GameOver { result: GameResult },
    /// Internal inconsistency detected before mutating the board
    Invariant(InvariantViolation),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::NotYourTurn { square, color } => {
                write!(f, "Piece on {square} is {color}, who is not on move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to {kind:?}")
            }
            MoveError::GameOver { result } => {
                write!(f, "Game is over ({result})")
            }
            MoveError::Invariant(violation) => {
                write!(f, "Internal error: {violation}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<InvariantViolation> for MoveError {
    fn from(violation: InvariantViolation) -> Self {
        MoveError::Invariant(violation)
    }
}

/// Internal invariant failures. These indicate a bug in move application
/// rather than a caller mistake; operations abort without corrupting the
/// board when one is detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A king of the given color is missing from the board
    KingMissing { color: Color },
    /// The cached king location does not hold that color's king
    KingCacheMismatch { color: Color, cached: Square },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::KingMissing { color } => {
                write!(f, "{color} king missing from the board")
            }
            InvariantViolation::KingCacheMismatch { color, cached } => {
                write!(f, "Cached {color} king location {cached} holds no {color} king")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
