//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece instead of playing moves from
//! the starting position.
//!
//! # Example
//! ```
//! use chess_minimax::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .piece(a2, Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.legal_moves(Color::White).len(), 7);
//! ```

use super::{Board, BoardError, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    king_moved: [Option<bool>; 2],
    en_passant_target: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board
                .pieces()
                .map(|p| (p.square(), p.color(), p.kind()))
                .collect(),
            ..Self::default()
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Override whether `color`'s king counts as having moved.
    ///
    /// By default a king on its home square (e1 or e8) is unmoved and any
    /// other king has moved.
    #[must_use]
    pub fn king_moved(mut self, color: Color, moved: bool) -> Self {
        self.king_moved[color.index()] = Some(moved);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    ///
    /// Fails if a color has more than one king or a pawn stands on the
    /// first or last rank.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut kings = [0usize; 2];

        for (square, color, kind) in self.pieces {
            match kind {
                PieceKind::King => {
                    kings[color.index()] += 1;
                    if kings[color.index()] > 1 {
                        return Err(BoardError::DuplicateKing { color });
                    }
                }
                PieceKind::Pawn if square.rank() == 0 || square.rank() == 7 => {
                    return Err(BoardError::PawnOnBackRank { square });
                }
                _ => {}
            }
            board.put(Piece::new(kind, color, square));
        }

        for color in Color::BOTH {
            let home = Square::new(4, color.back_rank());
            let off_home = board.find_king(color).is_some_and(|sq| Some(sq) != home);
            board.king_moved[color.index()] = self.king_moved[color.index()].unwrap_or(off_home);
        }
        board.en_passant_target = self.en_passant_target;

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build()
            .unwrap();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e8")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
        assert!(!board.king_moved(Color::White));
        assert!(!board.king_moved(Color::Black));
    }

    #[test]
    fn test_king_off_home_square_counts_as_moved() {
        let board = BoardBuilder::new()
            .piece(sq("g1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build()
            .unwrap();
        assert!(board.king_moved(Color::White));
        assert!(!board.king_moved(Color::Black));

        let overridden = BoardBuilder::new()
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .king_moved(Color::Black, true)
            .build()
            .unwrap();
        assert!(overridden.king_moved(Color::Black));
    }

    #[test]
    fn test_duplicate_king_rejected() {
        let result = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("d1"), Color::White, PieceKind::King)
            .build();
        assert_eq!(
            result,
            Err(BoardError::DuplicateKing {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_pawn_on_back_rank_rejected() {
        let result = BoardBuilder::new()
            .piece(sq("c8"), Color::White, PieceKind::Pawn)
            .build();
        assert_eq!(result, Err(BoardError::PawnOnBackRank { square: sq("c8") }));
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, PieceKind::Knight)
            .piece(sq("d4"), Color::Black, PieceKind::Bishop)
            .build()
            .unwrap();
        let piece = board.piece_at(sq("d4")).unwrap();
        assert_eq!(piece.kind(), PieceKind::Bishop);
        assert_eq!(piece.color(), Color::Black);
        assert_eq!(piece.square(), sq("d4"));
    }
}
