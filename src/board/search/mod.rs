//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The root color maximizes the material balance from its own point of
//! view and the opponent minimizes it. Every ply clones the board for each
//! legal move; nothing is made and unmade in place. Depth is the only
//! bound on recursion, so a search always runs to completion.

mod log;
mod params;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(feature = "logging")]
pub use self::log::LogLogger;
pub use self::log::{SearchInfo, SearchLogger, StdoutLogger};
pub use params::{SearchParams, TieBreak};

use self::log::trace_root_move;
use super::{Board, Color, Move, MATE_SCORE};

/// Bound wider than any reachable score
const INFINITY: i32 = MATE_SCORE + 1;

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when no move is available
    pub best_move: Option<Move>,
    /// Score of the best move from the searching color's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Best move for `color` at `depth` plies with default parameters.
///
/// Returns `None` only when `color` has no legal moves.
#[must_use]
pub fn find_best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    search(board, color, &SearchParams::with_depth(depth)).best_move
}

/// Search `board` for `color` with explicit parameters.
#[must_use]
pub fn search(board: &Board, color: Color, params: &SearchParams) -> SearchResult {
    run_search(board, color, params, None)
}

/// Like [`search`], reporting the finished search to `logger`.
#[must_use]
pub fn search_with_logger(
    board: &Board,
    color: Color,
    params: &SearchParams,
    logger: &dyn SearchLogger,
) -> SearchResult {
    run_search(board, color, params, Some(logger))
}

fn run_search(
    board: &Board,
    color: Color,
    params: &SearchParams,
    logger: Option<&dyn SearchLogger>,
) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Searcher {
        params,
        root: color,
        stats: SearchStats {
            nodes: 1,
            cutoffs: 0,
        },
    };

    let legal = board.legal_moves(color);
    let candidates: Vec<Move> = legal
        .iter()
        .copied()
        .filter(|mv| !params.excluded.contains(mv))
        .collect();

    let mut best_score = if legal.is_empty() {
        board.no_moves_score(color, color, 0)
    } else {
        board.material_balance(color)
    };
    let mut best_moves: Vec<Move> = Vec::new();

    // A random tie-break needs exact scores for moves equal to the best so
    // far, so their window starts one below it.
    let slack = match params.tie_break {
        TieBreak::First => 0,
        TieBreak::Random { .. } => 1,
    };
    let child_depth = params.depth.saturating_sub(1);

    for mv in candidates {
        let mut child = board.clone();
        child.apply_move_unchecked(mv);
        let alpha = if best_moves.is_empty() {
            -INFINITY
        } else {
            best_score - slack
        };
        let score = searcher.minimax(&child, color.opponent(), child_depth, 1, alpha, INFINITY);
        trace_root_move(mv, score);

        if best_moves.is_empty() || score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score && slack > 0 {
            best_moves.push(mv);
        }
    }

    let best_move = match params.tie_break {
        TieBreak::First => best_moves.first().copied(),
        TieBreak::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            best_moves.choose(&mut rng).copied()
        }
    };

    let result = SearchResult {
        best_move,
        score: best_score,
        stats: searcher.stats,
    };
    if let Some(logger) = logger {
        logger.info(&SearchInfo {
            depth: params.depth,
            score: result.score,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms: start.elapsed().as_millis(),
            best_move: result.best_move,
        });
    }
    result
}

struct Searcher<'a> {
    params: &'a SearchParams,
    root: Color,
    stats: SearchStats,
}

impl Searcher<'_> {
    /// Minimax value of `board` with `to_move` on move, fail-soft within
    /// `(alpha, beta)`: values strictly inside the window are exact.
    fn minimax(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return board.no_moves_score(to_move, self.root, ply);
        }
        if depth == 0 {
            return board.material_balance(self.root);
        }

        let maximizing = to_move == self.root;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for &mv in &moves {
            let mut child = board.clone();
            child.apply_move_unchecked(mv);
            let score = self.minimax(&child, to_move.opponent(), depth - 1, ply + 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.params.alpha_beta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
