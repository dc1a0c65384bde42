//! Static evaluation.
//!
//! Material only, counted from one color's point of view, plus the scores
//! of positions where the side to move has no legal moves.

use super::{Board, Color};

/// Score of delivering checkmate at the root. Exceeds any material sum.
pub const MATE_SCORE: i32 = 1_000_000;

/// Score of a stalemate, independent of material.
pub const DRAW_SCORE: i32 = 0;

/// Mate scores at or beyond this magnitude are forced mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

impl Board {
    /// Own material minus opponent material, in centipawns.
    #[must_use]
    pub fn material_balance(&self, perspective: Color) -> i32 {
        self.pieces()
            .map(|p| {
                let value = p.kind().value();
                if p.color() == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    /// Static score of this position for `perspective` with `to_move` on move.
    ///
    /// When `to_move` has no legal moves the position is terminal: a
    /// checkmate scores as a win or loss beyond any material and a stalemate
    /// scores as a draw. `ply` is the distance from the search root, so
    /// nearer mates score higher.
    #[must_use]
    pub fn evaluate(&self, to_move: Color, perspective: Color, ply: u32) -> i32 {
        if self.legal_moves(to_move).is_empty() {
            return self.no_moves_score(to_move, perspective, ply);
        }
        self.material_balance(perspective)
    }

    /// Score of a node where `to_move` has no legal moves.
    pub(crate) fn no_moves_score(&self, to_move: Color, perspective: Color, ply: u32) -> i32 {
        if !self.is_in_check(to_move) {
            return DRAW_SCORE;
        }
        let mate = MATE_SCORE - ply as i32;
        if to_move == perspective {
            -mate
        } else {
            mate
        }
    }
}

/// True if `score` reports a forced mate for either side.
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}
