//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fd_core::{Turn, VehicleId};
use fd_sim::{Dispatch, RunReport, SimObserver, TurnSummary};

use crate::row::{CommandRow, TurnSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams kept commands and turn summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_dispatch(&mut self, turn: Turn, vehicle: VehicleId, dispatch: &Dispatch) {
        if let Dispatch::Assigned { assignment, finish, .. } = dispatch {
            let rows = CommandRow::pair(turn, vehicle.0, assignment, *finish);
            let result = self.writer.write_commands(&rows);
            self.store_err(result);
        }
    }

    fn on_turn_end(&mut self, turn: Turn, summary: &TurnSummary) {
        let result = self.writer.write_turn_summary(&TurnSummaryRow::new(turn, summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_turn: Turn, _report: &RunReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
