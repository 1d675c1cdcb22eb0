//! Simulation observer trait for progress reporting and data collection.

use fd_core::{Turn, VehicleId};

use crate::{Dispatch, RunReport, TurnSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_turn_end(&mut self, turn: Turn, summary: &TurnSummary) {
///         if turn.0 % self.interval == 0 {
///             println!("{turn}: {} dispatched", summary.dispatched);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each turn, before any vehicle is woken.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called once per woken vehicle with the outcome of its dispatch.
    fn on_dispatch(&mut self, _turn: Turn, _vehicle: VehicleId, _dispatch: &Dispatch) {}

    /// Called at the end of each turn, after completed orders are dropped.
    fn on_turn_end(&mut self, _turn: Turn, _summary: &TurnSummary) {}

    /// Called once after the final turn completes.
    fn on_sim_end(&mut self, _final_turn: Turn, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
