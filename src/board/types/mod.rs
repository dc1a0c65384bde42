//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and placed pieces
//! - `Square` - a board coordinate that is always on the board
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastleSide` - castling geometry

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastleSide;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
