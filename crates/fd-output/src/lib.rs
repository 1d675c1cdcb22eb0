//! `fd-output` — result writers for the fleet-dispatch engine.
//!
//! | Writer               | Output                                         |
//! |----------------------|------------------------------------------------|
//! | [`SubmissionWriter`] | The command list in submission format          |
//! | [`CsvWriter`]        | `commands.csv`, `turn_summaries.csv`           |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven during the run by
//! [`SimOutputObserver`], which implements `fd_sim::SimObserver`.  The
//! submission needs the final command logs, so it is written after the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fd_output::{CsvWriter, SimOutputObserver, SubmissionWriter};
//!
//! let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! SubmissionWriter::create(Path::new("busy_day.out"))?.write_sim(&sim)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod submission;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CommandRow, TurnSummaryRow};
pub use submission::SubmissionWriter;
pub use writer::OutputWriter;
