//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `commands.csv`
//! - `turn_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CommandRow, OutputResult, TurnSummaryRow};
use crate::writer::OutputWriter;

pub const COMMAND_HEADER: [&str; 7] =
    ["turn", "vehicle", "kind", "target", "product", "quantity", "finish"];

pub const SUMMARY_HEADER: [&str; 7] =
    ["turn", "woken", "dispatched", "retracted", "idle", "completed", "active_orders"];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    commands:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut commands = Writer::from_path(dir.join("commands.csv"))?;
        commands.write_record(COMMAND_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("turn_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { commands, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_commands(&mut self, rows: &[CommandRow]) -> OutputResult<()> {
        for row in rows {
            self.commands.write_record(&[
                row.turn.to_string(),
                row.vehicle.to_string(),
                row.kind.to_string(),
                row.target.to_string(),
                row.product.to_string(),
                row.quantity.to_string(),
                row.finish.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.turn.to_string(),
            row.woken.to_string(),
            row.dispatched.to_string(),
            row.retracted.to_string(),
            row.idle.to_string(),
            row.completed.to_string(),
            row.active_orders.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.commands.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
