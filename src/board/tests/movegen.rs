//! Move generation and attack detection tests.

use super::{mv, names, play, position, sq};
use crate::board::{Board, Color, PieceKind};

// ============================================================================
// Starting position
// ============================================================================

#[test]
fn test_starting_position_has_twenty_moves_each() {
    let board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_reply_count_after_e4() {
    let board = play(&["e2e4"]);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
    // Bishop f1, queen d1 and king e1 are now free to move.
    assert_eq!(board.legal_moves(Color::White).len(), 30);
}

#[test]
fn test_starting_knight_moves() {
    let board = Board::new();
    let moves = board.legal_moves_from(sq("g1"));
    assert_eq!(names(&moves), vec!["g1f3", "g1h3"]);
}

#[test]
fn test_legal_moves_from_empty_square() {
    let board = Board::new();
    assert!(board.legal_moves_from(sq("e4")).is_empty());
}

// ============================================================================
// Piece movement
// ============================================================================

#[test]
fn test_knight_in_corner() {
    let board = position(&[
        ("a1", Color::White, PieceKind::Knight),
        ("h1", Color::White, PieceKind::King),
        ("h8", Color::Black, PieceKind::King),
    ]);
    let knight = board.piece_at(sq("a1")).unwrap();
    assert_eq!(
        names(&board.pseudo_legal_moves(&knight)),
        vec!["a1b3", "a1c2"]
    );
}

#[test]
fn test_queen_on_open_board() {
    let board = position(&[
        ("d4", Color::White, PieceKind::Queen),
        ("a8", Color::White, PieceKind::King),
        ("h1", Color::Black, PieceKind::King),
    ]);
    let queen = board.piece_at(sq("d4")).unwrap();
    assert_eq!(board.pseudo_legal_moves(&queen).len(), 27);
}

#[test]
fn test_rook_stops_at_friend_and_captures_enemy() {
    let board = position(&[
        ("d4", Color::White, PieceKind::Rook),
        ("d6", Color::White, PieceKind::Pawn),
        ("d2", Color::Black, PieceKind::Pawn),
        ("a8", Color::White, PieceKind::King),
        ("h1", Color::Black, PieceKind::King),
    ]);
    let rook = board.piece_at(sq("d4")).unwrap();
    let moves = board.pseudo_legal_moves(&rook);

    assert_eq!(moves.len(), 10);
    assert!(moves.contains(&mv("d4d5")));
    assert!(moves.contains(&mv("d4d2")), "enemy piece can be captured");
    assert!(!moves.contains(&mv("d4d1")), "ray stops at the capture");
    assert!(!moves.contains(&mv("d4d6")), "own piece blocks");
    assert!(!moves.contains(&mv("d4d7")));
}

#[test]
fn test_bishop_blocked_by_own_pawns() {
    let board = Board::new();
    let bishop = board.piece_at(sq("c1")).unwrap();
    assert!(board.pseudo_legal_moves(&bishop).is_empty());
}

#[test]
fn test_pawn_single_and_double_push() {
    let board = Board::new();
    assert_eq!(
        names(&board.legal_moves_from(sq("e2"))),
        vec!["e2e3", "e2e4"]
    );
    assert_eq!(
        names(&board.legal_moves_from(sq("e7"))),
        vec!["e7e5", "e7e6"]
    );
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    let blocked_far = position(&[
        ("e2", Color::White, PieceKind::Pawn),
        ("e4", Color::Black, PieceKind::Knight),
        ("a1", Color::White, PieceKind::King),
        ("h8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(names(&blocked_far.legal_moves_from(sq("e2"))), vec!["e2e3"]);

    let blocked_near = position(&[
        ("e2", Color::White, PieceKind::Pawn),
        ("e3", Color::Black, PieceKind::Knight),
        ("a1", Color::White, PieceKind::King),
        ("h8", Color::Black, PieceKind::King),
    ]);
    assert!(blocked_near.legal_moves_from(sq("e2")).is_empty());
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let board = position(&[
        ("e3", Color::White, PieceKind::Pawn),
        ("d4", Color::Black, PieceKind::Knight),
        ("f4", Color::White, PieceKind::Knight),
        ("e4", Color::Black, PieceKind::Pawn),
        ("a1", Color::White, PieceKind::King),
        ("h8", Color::Black, PieceKind::King),
    ]);
    // Forward is blocked, f4 holds a friend.
    assert_eq!(names(&board.legal_moves_from(sq("e3"))), vec!["e3d4"]);
}

#[test]
fn test_pawn_on_edge_file_captures_one_way() {
    let board = position(&[
        ("a4", Color::White, PieceKind::Pawn),
        ("b5", Color::Black, PieceKind::Pawn),
        ("e1", Color::White, PieceKind::King),
        ("e8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(
        names(&board.legal_moves_from(sq("a4"))),
        vec!["a4a5", "a4b5"]
    );
}

// ============================================================================
// Check and legality
// ============================================================================

#[test]
fn test_pinned_piece_has_no_legal_moves() {
    let board = position(&[
        ("e1", Color::White, PieceKind::King),
        ("e2", Color::White, PieceKind::Bishop),
        ("e8", Color::Black, PieceKind::Rook),
        ("a8", Color::Black, PieceKind::King),
    ]);
    let bishop = board.piece_at(sq("e2")).unwrap();
    assert!(!board.pseudo_legal_moves(&bishop).is_empty());
    assert!(board.legal_moves_from(sq("e2")).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = position(&[
        ("e1", Color::White, PieceKind::King),
        ("d8", Color::Black, PieceKind::Rook),
        ("h8", Color::Black, PieceKind::King),
    ]);
    let moves = board.legal_moves(Color::White);
    assert!(!moves.contains(&mv("e1d1")));
    assert!(!moves.contains(&mv("e1d2")));
    assert!(moves.contains(&mv("e1f2")));
}

#[test]
fn test_check_must_be_answered() {
    let board = position(&[
        ("e1", Color::White, PieceKind::King),
        ("a2", Color::White, PieceKind::Rook),
        ("e5", Color::Black, PieceKind::Rook),
        ("h8", Color::Black, PieceKind::King),
    ]);
    assert!(board.is_in_check(Color::White));
    for m in &board.legal_moves(Color::White) {
        let mut child = board.clone();
        child.apply_move(*m).unwrap();
        assert!(
            !child.is_in_check(Color::White),
            "{m} leaves the king in check"
        );
    }
    // The rook can block on e2.
    assert!(board.legal_moves(Color::White).contains(&mv("a2e2")));
}

#[test]
fn test_pinned_piece_still_gives_check() {
    let board = position(&[
        ("e1", Color::White, PieceKind::King),
        ("e2", Color::White, PieceKind::Knight),
        ("e8", Color::Black, PieceKind::Rook),
        ("d4", Color::Black, PieceKind::King),
    ]);
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_pawn_attacks_diagonally_not_forward() {
    let board = position(&[
        ("e4", Color::White, PieceKind::Pawn),
        ("d5", Color::Black, PieceKind::Knight),
        ("e5", Color::Black, PieceKind::Rook),
        ("a1", Color::White, PieceKind::King),
        ("h8", Color::Black, PieceKind::King),
    ]);
    assert!(board.is_square_attacked(sq("d5"), Color::White));
    assert!(!board.is_square_attacked(sq("e5"), Color::White));
}

#[test]
fn test_no_king_is_never_in_check() {
    let board = position(&[
        ("e1", Color::White, PieceKind::King),
        ("e8", Color::Black, PieceKind::Rook),
    ]);
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_in_check(Color::White));
}

#[test]
fn test_pseudo_legal_moves_for_color() {
    let board = Board::new();
    assert_eq!(board.pseudo_legal_moves_for(Color::White).len(), 20);
}
