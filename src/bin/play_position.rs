use std::env;
use std::error::Error;
use std::process;

use chess_minimax::board::{
    search_with_logger, Board, Color, Move, MoveError, SearchParams, StdoutLogger,
};
use chess_minimax::status;

const USAGE: &str = "usage: play_position [--depth N] <move1> <move2> ...";

struct Args {
    depth: u32,
    moves: Vec<Move>,
}

fn parse_args(raw: &[String]) -> Result<Args, Box<dyn Error>> {
    let mut depth = SearchParams::default().depth;
    let mut moves = Vec::new();
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" | "-d" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                depth = value.parse()?;
            }
            "--help" | "-h" => return Err(USAGE.into()),
            text => moves.push(text.parse()?),
        }
    }
    Ok(Args { depth, moves })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new();
    let mut color = Color::White;
    for mv in args.moves {
        if !board.legal_moves(color).contains(&mv) {
            return Err(MoveError::Illegal { mv, color }.into());
        }
        board.apply_move(mv)?;
        color = color.opponent();
    }

    print!("{board}");
    println!("side_to_move: {}", color.to_string().to_lowercase());
    println!("status: {}", status(&board, color));

    let legal = board.legal_moves(color);
    println!("legal_moves: {}", legal.len());
    for mv in &legal {
        println!("{mv}");
    }

    let params = SearchParams::with_depth(args.depth);
    let result = search_with_logger(&board, color, &params, &StdoutLogger);
    match result.best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove none"),
    }
    Ok(())
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let outcome = parse_args(&raw).and_then(run);
    if let Err(err) = outcome {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
