//! Chess rules with a fixed-depth minimax opponent.
//!
//! The [`board`] module holds the position, move generation, move
//! application and the search. [`game`] interprets a position for whoever
//! drives the game loop.

pub mod board;
pub mod game;

pub use board::{find_best_move, Board, Color, Move, Piece, PieceKind, Square};
pub use game::{status, GameStatus};
