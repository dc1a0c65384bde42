//! Error types for board operations.

use std::fmt;

use super::{Color, Move, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { file: i32, rank: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { file, rank } => {
                write!(f, "Square ({file}, {rank}) is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for rejected moves on the authoritative board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square is empty
    NoPiece { square: Square },
    /// The move is not among the legal moves of the moving color
    Illegal { mv: Move, color: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::Illegal { mv, color } => write!(f, "Illegal move {mv} for {color}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for position construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// More than one king of the same color was placed
    DuplicateKing { color: Color },
    /// Pawn placed on the first or last rank
    PawnOnBackRank { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
            BoardError::PawnOnBackRank { square } => {
                write!(f, "Pawn cannot stand on {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
