//! Side-channel hooks into the refine loop.
//!
//! Observers only receive copies of cells and counters; nothing they do can
//! change the search result.

use super::types::{Cell, SearchStats};

/// Callbacks invoked by the search. All methods default to no-ops.
pub trait SearchObserver {
    /// The refine loop replaced the best cell; `probes` counts cells created so far.
    fn on_improve(&mut self, _best: &Cell, _probes: usize) {}
    /// One frontier pop has been graded; `best` already reflects `popped`.
    fn on_step(&mut self, _popped: &Cell, _best: &Cell) {}
    /// The search finished (also called on the degenerate early exit).
    fn on_finish(&mut self, _stats: &SearchStats) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that reports progress through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn on_improve(&mut self, best: &Cell, probes: usize) {
        tracing::debug!(
            probes,
            distance = (1e4 * best.d).round() / 1e4,
            x = best.center.x,
            y = best.center.y,
            "found_best"
        );
    }

    fn on_finish(&mut self, stats: &SearchStats) {
        tracing::info!(
            probes = stats.probes,
            improvements = stats.improvements,
            best_distance = ?stats.best_distance,
            degenerate = stats.degenerate,
            "label_search_done"
        );
    }
}

/// Observer that keeps everything it sees (white-box tests, diagnostics).
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// `(popped, best)` per refine iteration.
    pub steps: Vec<(Cell, Cell)>,
    /// `(best distance, probes)` at each improvement.
    pub improvements: Vec<(f64, usize)>,
    pub finished: Option<SearchStats>,
}

impl SearchObserver for Recorder {
    fn on_improve(&mut self, best: &Cell, probes: usize) {
        self.improvements.push((best.d, probes));
    }

    fn on_step(&mut self, popped: &Cell, best: &Cell) {
        self.steps.push((*popped, *best));
    }

    fn on_finish(&mut self, stats: &SearchStats) {
        self.finished = Some(*stats);
    }
}
