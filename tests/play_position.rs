use std::process::Command;

use chess_minimax::board::{Board, Color, Move};

fn run(args: &[&str]) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_play_position");
    let output = Command::new(exe)
        .args(args)
        .output()
        .expect("failed to spawn play_position");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn suggests_legal_reply() {
    let (ok, stdout, _) = run(&["--depth", "2", "e2e4"]);
    assert!(ok);
    assert!(stdout.contains("side_to_move: black"));
    assert!(stdout.contains("status: ongoing"));
    assert!(stdout.contains("legal_moves: 20"));
    assert!(stdout.contains("info depth 2"));

    let bestmove = stdout
        .lines()
        .find_map(|line| line.strip_prefix("bestmove "))
        .expect("no bestmove found");
    let reply: Move = bestmove.trim().parse().expect("bestmove is not a move");

    let mut board = Board::new();
    board.apply_move("e2e4".parse().unwrap()).unwrap();
    assert!(board.legal_moves(Color::Black).contains(&reply));
}

#[test]
fn reports_checkmate() {
    let (ok, stdout, _) = run(&["-d", "1", "f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(ok);
    assert!(stdout.contains("status: checkmate"));
    assert!(stdout.contains("legal_moves: 0"));
    assert!(stdout.contains("bestmove none"));
}

#[test]
fn rejects_illegal_move() {
    let (ok, _, stderr) = run(&["e2e5"]);
    assert!(!ok);
    assert!(stderr.contains("Illegal move e2e5 for White"));
}

#[test]
fn rejects_move_out_of_turn() {
    let (ok, _, stderr) = run(&["e7e5"]);
    assert!(!ok);
    assert!(stderr.contains("Illegal move e7e5 for White"));
}

#[test]
fn rejects_bad_notation() {
    let (ok, _, stderr) = run(&["e2e"]);
    assert!(!ok);
    assert!(stderr.starts_with("error:"));
}
