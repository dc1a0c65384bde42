use super::super::attack_tables::{DIAGONAL_RAYS, STRAIGHT_RAYS};
use super::super::{Board, Move, MoveList, Piece};

impl Board {
    /// Bishop, rook and queen moves.
    ///
    /// Each ray stops at the first occupied square; that square is included
    /// only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(&self, slider: &Piece, moves: &mut MoveList) {
        let kind = slider.kind();
        let diagonal = kind.slides_diagonally().then_some(&DIAGONAL_RAYS[..]);
        let straight = kind.slides_straight().then_some(&STRAIGHT_RAYS[..]);

        for rays in [diagonal, straight].into_iter().flatten() {
            for &(df, dr) in rays {
                self.walk_ray(slider, df, dr, moves);
            }
        }
    }

    fn walk_ray(&self, slider: &Piece, df: i32, dr: i32, moves: &mut MoveList) {
        let from = slider.square();
        let mut cursor = from.offset(df, dr);
        while let Some(to) = cursor {
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.color() != slider.color() {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(df, dr);
        }
    }
}
