//! Chess board representation and game logic.
//!
//! An 8x8 grid of cells, each owning at most one piece, plus the king-moved
//! flags and en passant target that castling and en passant depend on.
//! Supports castling, en passant and promotion (always to a queen).
//!
//! # Example
//! ```
//! use chess_minimax::board::{find_best_move, Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let reply = find_best_move(&board, Color::White, 2).unwrap();
//! assert!(moves.contains(&reply));
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod eval;
mod make_move;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, MoveParseError, SquareError};
pub use eval::{is_mate_score, DRAW_SCORE, MATE_SCORE, MATE_THRESHOLD};
pub use state::Board;
pub use types::{
    CastleSide, Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};

// Public API - search functions and configuration
#[cfg(feature = "logging")]
pub use search::LogLogger;
pub use search::{
    find_best_move, search, search_with_logger, SearchInfo, SearchLogger, SearchParams,
    SearchResult, SearchStats, StdoutLogger, TieBreak,
};
