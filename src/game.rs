//! Caller-side interpretation of a position.
//!
//! The board never declares the game over. Whoever holds the board decides
//! by combining `legal_moves` and `is_in_check` for the side to move, which
//! is what `status` does.

use std::fmt;

use crate::board::{Board, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Legal moves exist and the king is safe
    Ongoing,
    /// Legal moves exist but the king is attacked
    Check,
    /// No legal moves, king attacked
    Checkmate,
    /// No legal moves, king safe
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Status of the game with `to_move` on move.
#[must_use]
pub fn status(board: &Board, to_move: Color) -> GameStatus {
    let in_check = board.is_in_check(to_move);
    let has_moves = !board.legal_moves(to_move).is_empty();
    match (has_moves, in_check) {
        (true, false) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}
