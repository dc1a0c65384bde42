//! Castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The corner a castling king moves toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Side implied by a king's horizontal displacement, if it is a castle.
    #[inline]
    #[must_use]
    pub const fn from_king_step(df: i32) -> Option<CastleSide> {
        match df {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Horizontal direction from king toward this side's corner
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// File of the corner rook
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> i32 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on, next to the king's destination file
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self, king_to_file: i32) -> i32 {
        king_to_file - self.direction()
    }
}
