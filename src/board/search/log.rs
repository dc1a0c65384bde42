use crate::board::Move;

pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        let best = info
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string());
        println!(
            "info depth {} score {} nodes {} cutoffs {} time {} best {}",
            info.depth, info.score, info.nodes, info.cutoffs, info.time_ms, best
        );
    }
}

/// Forwards search reports to the `log` facade at debug level.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "search depth={} score={} nodes={} cutoffs={} time_ms={} best={:?}",
            info.depth,
            info.score,
            info.nodes,
            info.cutoffs,
            info.time_ms,
            info.best_move
        );
    }
}

#[inline]
pub(crate) fn trace_root_move(mv: Move, score: i32) {
    #[cfg(feature = "logging")]
    log::trace!("root move {mv} scored {score}");
    #[cfg(not(feature = "logging"))]
    let _ = (mv, score);
}
