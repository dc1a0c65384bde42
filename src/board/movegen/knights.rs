use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece, moves: &mut MoveList) {
        let from = knight.square();
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.can_land_on(to, knight.color()) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
