//! Move generation.
//!
//! Each piece kind produces its pseudo-legal moves (movement pattern and
//! occupancy only). `legal_moves` then plays every candidate on a clone and
//! drops those that leave the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves of a single piece.
    #[must_use]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_piece_moves(piece, &mut moves);
        moves
    }

    pub(crate) fn generate_piece_moves(&self, piece: &Piece, moves: &mut MoveList) {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(piece, moves),
            PieceKind::Knight => self.generate_knight_moves(piece, moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_slider_moves(piece, moves)
            }
            PieceKind::King => self.generate_king_moves(piece, moves),
        }
    }

    /// Pseudo-legal moves of every piece of `color`, in board-scan order.
    #[must_use]
    pub fn pseudo_legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            self.generate_piece_moves(&piece, &mut moves);
        }
        moves
    }

    /// Fully legal moves of `color`, in board-scan order.
    ///
    /// Every pseudo-legal candidate is applied to a clone of this board and
    /// kept only if `color` is not in check afterwards.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut legal = MoveList::new();
        for mv in &self.pseudo_legal_moves_for(color) {
            let mut probe = self.clone();
            probe.apply_move_unchecked(*mv);
            if !probe.is_in_check(color) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// Legal moves of the piece standing on `from`, for move hints.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(from) {
            for mv in self.legal_moves(piece.color()).from_square(from) {
                moves.push(mv);
            }
        }
        moves
    }

    /// True iff some pseudo-legal move of the opponent lands on `color`'s king.
    ///
    /// The attacker's own king safety is deliberately ignored: a pinned
    /// piece still gives check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };
        self.is_square_attacked(king_sq, color.opponent())
    }

    /// True iff a pseudo-legal move of `attacker` ends on `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        let mut moves = MoveList::new();
        for piece in self.pieces_of(attacker) {
            self.generate_piece_moves(&piece, &mut moves);
            if moves.iter().any(|mv| mv.to() == sq) {
                return true;
            }
            moves.clear();
        }
        false
    }

    /// True if `sq` is empty or holds a piece of the other color.
    #[inline]
    pub(crate) fn can_land_on(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq)
            .map_or(true, |occupant| occupant.color() != color)
    }

    /// Leaf node count of the legal move tree, colors alternating from `color`.
    #[must_use]
    pub fn perft(&self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| {
                let mut child = self.clone();
                child.apply_move_unchecked(mv);
                child.perft(color.opponent(), depth - 1)
            })
            .sum()
    }
}
