//! Square type and coordinate arithmetic.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, stored as (file, rank).
///
/// File 0 is the a-file. Rank index 0 is the eighth rank (Black's back
/// rank) and rank index 7 is the first rank, so the grid reads top to bottom
/// the way it is printed. Off-board coordinates cannot be represented; every
/// constructor and offset helper returns `None` for them instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square, returning `None` for coordinates outside 0..8.
    #[must_use]
    pub fn new(file: i32, rank: i32) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> i32 {
        self.file as i32
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.rank as i32
    }

    /// Index into a 64-cell grid (a8=0, b8=1, ..., h1=63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `(df, dr)` away, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i32, dr: i32) -> Option<Self> {
        Square::new(self.file() + df, self.rank() + dr)
    }

    /// Iterate over all 64 squares in board-scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, 8 - self.rank)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(file, rank).ok_or(SquareError::OutOfBounds { file, rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => i32::from(c - b'a'),
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => 7 - i32::from(c - b'1'),
            _ => return Err(invalid()),
        };

        Square::new(file, rank).ok_or_else(invalid)
    }
}
