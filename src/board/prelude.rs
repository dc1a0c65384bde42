//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_minimax::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(!board.is_in_check(Color::White));
//! ```

pub use super::{
    find_best_move, search, Board, BoardBuilder, Color, Move, MoveError, MoveList, Piece,
    PieceKind, SearchParams, SearchResult, Square,
};
