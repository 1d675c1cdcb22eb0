//! The `OutputWriter` trait implemented by streaming backends.

use crate::{CommandRow, OutputResult, TurnSummaryRow};

/// Sink for rows produced while the run is in progress.
///
/// Errors never abort the run: [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the commands of one kept assignment.
    fn write_commands(&mut self, rows: &[CommandRow]) -> OutputResult<()>;

    /// Write one turn summary row.
    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
