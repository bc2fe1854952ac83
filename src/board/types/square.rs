//! Square type and algebraic notation codec.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::NotationError;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 8 and column 0 is file 'a', so the board reads top-down the
/// way it is printed: `Square(0, 0)` is a8 and `Square(7, 4)` is e1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The printed rank digit (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.0
    }

    /// The printed file letter ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (self.1 as u8 + b'a') as char
    }

    /// Flat index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Offset the square by row/col deltas, returning `None` off-board.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = NotationError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(NotationError::OutOfBounds { row, col })
    }
}

impl FromStr for Square {
    type Err = NotationError;

    /// Parse algebraic notation such as "e4". This is the single validation
    /// point for textual coordinates entering the engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                return Err(NotationError::InvalidLength {
                    len: s.chars().count(),
                })
            }
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(NotationError::InvalidFile { ch: file }),
        };

        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(NotationError::InvalidRank { ch: rank }),
        };

        Ok(Square(row, col))
    }
}
