//! Move classification and application.
//!
//! Moves carry only their endpoints, so generation and application agree
//! on special moves through `move_kind`: a pawn landing on the en passant
//! target captures en passant, a pawn moving two ranks is a double push, a
//! pawn reaching rank index 0 or 7 promotes, and a king moving two files
//! castles.

use super::{Board, CastleSide, Move, MoveError, MoveKind, Piece, PieceKind, Square};

impl Board {
    /// Classify `mv` in this position.
    ///
    /// Returns `None` when the source square is empty.
    #[must_use]
    pub fn move_kind(&self, mv: Move) -> Option<MoveKind> {
        let piece = self.piece_at(mv.from())?;
        let kind = match piece.kind() {
            PieceKind::Pawn if mv.file_delta() != 0 && self.en_passant_target == Some(mv.to()) => {
                MoveKind::EnPassant
            }
            PieceKind::Pawn if is_last_rank(mv.to()) => MoveKind::Promotion,
            PieceKind::Pawn if mv.rank_delta().abs() == 2 => MoveKind::DoublePush,
            PieceKind::King => match CastleSide::from_king_step(mv.file_delta()) {
                Some(side) => MoveKind::Castle(side),
                None => self.plain_kind(mv),
            },
            _ => self.plain_kind(mv),
        };
        Some(kind)
    }

    fn plain_kind(&self, mv: Move) -> MoveKind {
        if self.is_empty(mv.to()) {
            MoveKind::Quiet
        } else {
            MoveKind::Capture
        }
    }

    /// Play a legal move on this board.
    ///
    /// The move must be one of `legal_moves` for the color of the piece on
    /// its source square; otherwise the board is left untouched and an error
    /// is returned.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveKind, MoveError> {
        let piece = self
            .piece_at(mv.from())
            .ok_or(MoveError::NoPiece { square: mv.from() })?;
        if !self.legal_moves(piece.color()).contains(&mv) {
            return Err(MoveError::Illegal {
                mv,
                color: piece.color(),
            });
        }
        Ok(self.apply_move_unchecked(mv))
    }

    /// Play `mv` without checking legality.
    ///
    /// Used on disposable clones while probing legality and searching. The
    /// source square must hold a piece; an empty source leaves the board
    /// unchanged apart from clearing the en passant target.
    pub(crate) fn apply_move_unchecked(&mut self, mv: Move) -> MoveKind {
        let Some(kind) = self.move_kind(mv) else {
            self.en_passant_target = None;
            return MoveKind::Quiet;
        };

        if kind == MoveKind::EnPassant {
            // the passed pawn stands beside the mover, on its origin rank
            if let Some(victim) = Square::new(mv.to().file(), mv.from().rank()) {
                self.take(victim);
            }
        }

        let Some(mut piece) = self.take(mv.from()) else {
            return kind;
        };
        piece.relocate(mv.to());

        if kind == MoveKind::Promotion {
            piece = Piece::new(PieceKind::Queen, piece.color(), mv.to());
        }
        self.put(piece);

        self.en_passant_target = if kind == MoveKind::DoublePush {
            Square::new(mv.from().file(), (mv.from().rank() + mv.to().rank()) / 2)
        } else {
            None
        };

        if piece.kind() == PieceKind::King {
            self.king_moved[piece.color().index()] = true;
        }
        if let MoveKind::Castle(side) = kind {
            self.move_castling_rook(mv.to(), side);
        }

        kind
    }

    fn move_castling_rook(&mut self, king_to: Square, side: CastleSide) {
        let corner = Square::new(side.rook_file(), king_to.rank());
        let target = Square::new(side.rook_target_file(king_to.file()), king_to.rank());
        let (Some(corner), Some(target)) = (corner, target) else {
            return;
        };
        if let Some(mut rook) = self.take(corner) {
            rook.relocate(target);
            self.put(rook);
        }
    }
}

fn is_last_rank(sq: Square) -> bool {
    sq.rank() == 0 || sq.rank() == 7
}
