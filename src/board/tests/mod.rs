//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `movegen.rs` - Pseudo-legal and legal move generation, check detection
//! - `special_moves.rs` - En passant, promotion and castling
//! - `edge_cases.rs` - Checkmate, stalemate, cloning and odd positions
//! - `search.rs` - Minimax and alpha-beta behaviour
//! - `proptest.rs` - Property-based tests over random games

mod movegen;

use crate::board::{Board, BoardBuilder, Color, Move, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("valid move")
}

/// Build a position from `(square, color, kind)` triples.
pub(super) fn position(pieces: &[(&str, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(name, color, kind)| {
            builder.piece(sq(name), color, kind)
        })
        .build()
        .expect("valid position")
}

/// Play coordinate moves from the starting position, White first.
pub(super) fn play(moves: &[&str]) -> Board {
    let mut board = Board::new();
    for text in moves {
        board
            .apply_move(mv(text))
            .unwrap_or_else(|err| panic!("{text}: {err}"));
    }
    board
}

pub(super) fn names(moves: &crate::board::MoveList) -> Vec<String> {
    let mut names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    names.sort();
    names
}
