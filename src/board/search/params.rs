use crate::board::Move;

/// How the root picks among moves that share the best score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First best move in board-scan order
    #[default]
    First,
    /// Uniformly random best move, reproducible from the seed
    Random { seed: u64 },
}

#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Plies to search below the root. The root itself is always expanded.
    pub depth: u32,
    /// Prune with alpha-beta bounds. Disabling it gives plain minimax with
    /// the same result, at a higher node count.
    pub alpha_beta: bool,
    /// Root moves that must not be returned.
    pub excluded: Vec<Move>,
    pub tie_break: TieBreak,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            alpha_beta: true,
            excluded: Vec::new(),
            tie_break: TieBreak::First,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Self::default()
        }
    }
}
