//! The submission text format.
//!
//! ```text
//! <number of commands>
//! <vehicle> L <depot> <product> <quantity>
//! <vehicle> D <order> <product> <quantity>
//! ...
//! ```
//!
//! Commands are listed vehicle by vehicle in id order, each vehicle's in
//! the order they were issued.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fd_fleet::Command;
use fd_sim::Sim;

use crate::OutputResult;

/// Renders command logs in submission format to any [`Write`] sink.
pub struct SubmissionWriter<W: Write> {
    out: W,
}

impl SubmissionWriter<BufWriter<File>> {
    /// Create (or truncate) `path` and write to it through a buffer.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> SubmissionWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write every command of `sim`, grouped by vehicle.  Returns the number
    /// of commands written.
    pub fn write_sim(&mut self, sim: &Sim) -> OutputResult<usize> {
        self.write_counted(sim.command_count(), sim.commands())
    }

    /// Write an explicit command list, in the given order.
    pub fn write_commands(&mut self, commands: &[Command]) -> OutputResult<usize> {
        self.write_counted(commands.len(), commands)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_counted<'a, I>(&mut self, count: usize, commands: I) -> OutputResult<usize>
    where
        I: IntoIterator<Item = &'a Command>,
    {
        writeln!(self.out, "{count}")?;
        for command in commands {
            writeln!(self.out, "{command}")?;
        }
        self.out.flush()?;
        Ok(count)
    }
}
