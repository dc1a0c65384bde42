use super::super::{Board, Move, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Pawn pushes, double pushes, captures and en passant captures.
    ///
    /// Moves onto the last rank are ordinary moves here; the promotion
    /// happens when the move is applied.
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece, moves: &mut MoveList) {
        let from = pawn.square();
        let color = pawn.color();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
            moves.push(Move::new(from, one));

            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(from, two));
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            let captures_enemy = self
                .piece_at(target)
                .is_some_and(|victim| victim.color() != color);
            if captures_enemy || self.en_passant_available(pawn, target) {
                moves.push(Move::new(from, target));
            }
        }
    }

    /// `target` is the en passant square and an enemy pawn stands beside
    /// `pawn` on the file being captured.
    fn en_passant_available(&self, pawn: &Piece, target: Square) -> bool {
        if self.en_passant_target != Some(target) {
            return false;
        }
        self.piece_at_coords(target.file(), pawn.square().rank())
            .is_some_and(|victim| {
                victim.kind() == PieceKind::Pawn && victim.color() != pawn.color()
            })
    }
}
