use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, CastleSide, Move, MoveList, Piece, PieceKind};

impl Board {
    pub(crate) fn generate_king_moves(&self, king: &Piece, moves: &mut MoveList) {
        let from = king.square();
        for &to in &KING_TARGETS[from.index()] {
            if self.can_land_on(to, king.color()) {
                moves.push(Move::new(from, to));
            }
        }

        if self.king_moved(king.color()) {
            return;
        }
        for side in CastleSide::BOTH {
            if self.castling_path_clear(king, side) {
                if let Some(to) = from.offset(2 * side.direction(), 0) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    /// A same-color rook stands in the `side` corner of the king's rank and
    /// every square between them is empty.
    ///
    /// Neither the rook's history nor attacks on the squares the king
    /// crosses are considered.
    fn castling_path_clear(&self, king: &Piece, side: CastleSide) -> bool {
        let from = king.square();
        let rook_file = side.rook_file();
        let corner_rook = self.piece_at_coords(rook_file, from.rank());
        let has_rook = corner_rook
            .is_some_and(|rook| rook.kind() == PieceKind::Rook && rook.color() == king.color());
        // the king must land strictly between its square and the rook
        if !has_rook || (rook_file - from.file()).abs() <= 2 {
            return false;
        }

        let (lo, hi) = if rook_file > from.file() {
            (from.file() + 1, rook_file)
        } else {
            (rook_file + 1, from.file())
        };
        (lo..hi).all(|file| self.piece_at_coords(file, from.rank()).is_none())
    }
}
