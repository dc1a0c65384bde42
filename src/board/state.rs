use super::{Color, Piece, PieceKind, Square};

/// The 8x8 position together with castling and en passant state.
///
/// Each occupied cell owns exactly one `Piece` whose stored square matches
/// the cell. `Clone` produces a fully independent board, which is what
/// legality probing and the search rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Option<Piece>; 64],
    /// Per color (White=0, Black=1): has this king ever moved
    pub(crate) king_moved: [bool; 2],
    pub(crate) en_passant_target: Option<Square>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in (0..8).zip(BACK_RANK.iter()) {
            for color in Color::BOTH {
                let back = color.back_rank();
                let pawns = color.pawn_start_rank();
                if let Some(sq) = Square::new(file, back) {
                    board.put(Piece::new(kind, color, sq));
                }
                if let Some(sq) = Square::new(file, pawns) {
                    board.put(Piece::new(PieceKind::Pawn, color, sq));
                }
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: [None; 64],
            king_moved: [false, false],
            en_passant_target: None,
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// The piece at raw coordinates; anything off the board reads as empty.
    #[inline]
    #[must_use]
    pub fn piece_at_coords(&self, file: i32, rank: i32) -> Option<Piece> {
        Square::new(file, rank).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Whether `color`'s king has moved at any point (castling is then gone).
    #[inline]
    #[must_use]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Square skipped by a double pawn push on the previous move.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Iterate over all pieces in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Iterate over the pieces of one color in board-scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.square())
    }

    /// Place `piece` on its own square, replacing whatever was there.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.cells[piece.square().index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
