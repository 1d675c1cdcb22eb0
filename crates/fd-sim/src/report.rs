//! Per-turn and whole-run statistics.

use fd_core::{OrderId, Turn};

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnSummary {
    /// Vehicles drained from the ready queue.
    pub woken:      usize,
    /// Load + deliver pairs that were kept.
    pub dispatched: usize,
    /// Pairs undone because they would finish after the deadline.
    pub retracted:  usize,
    /// Vehicles that found nothing to do.
    pub idle:       usize,
    /// Orders dropped from the active set at the end of the turn.
    pub completed:  usize,
    /// Orders still active after the turn.
    pub active:     usize,
}

/// Totals for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    pub deadline:       u64,
    /// Turns the loop actually processed.
    pub turns:          u64,
    pub dispatches:     usize,
    pub retractions:    usize,
    /// Vehicle-turns spent idle.
    pub idle:           usize,
    /// Commands left in all vehicle logs.
    pub commands:       usize,
    /// Orders still owed something when the run ended.
    pub open_orders:    usize,
    /// Every fulfilled order with the turn its last delivery finished, in
    /// the order they were fulfilled.
    pub completed:      Vec<(OrderId, Turn)>,
}

impl RunReport {
    /// Contest score: each order completed at turn `t` earns
    /// `ceil((deadline - t) * 100 / deadline)` points.
    pub fn score(&self) -> u64 {
        if self.deadline == 0 {
            return 0;
        }
        self.completed
            .iter()
            .map(|&(_, t)| (self.deadline.saturating_sub(t.0) * 100).div_ceil(self.deadline))
            .sum()
    }

    /// The turn at which the last completed order was finished.
    pub fn makespan(&self) -> Option<Turn> {
        self.completed.iter().map(|&(_, t)| t).max()
    }
}
