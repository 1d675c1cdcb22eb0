//! dispatch — run the greedy fleet scheduler on one problem file.
//!
//! ```text
//! dispatch <input> [output]
//! ```
//!
//! Writes the submission to `output` (default: `input` with an `.out`
//! extension), the command log and per-turn summaries to
//! `output/dispatch/`, and prints the run report.  Set `RUST_LOG=debug` to
//! trace every dispatch.
//!
//! ```text
//! cargo run -p dispatch -- demos/dispatch/data/sample.in
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use fd_fleet::load_problem_file;
use fd_output::{CsvWriter, SimOutputObserver, SubmissionWriter};
use fd_sim::SimBuilder;

const CSV_DIR: &str = "output/dispatch";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!("usage: dispatch <input> [output]");
    };
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| input.with_extension("out"));

    println!("=== dispatch ===");

    // 1. Load.
    let problem = load_problem_file(&input)
        .with_context(|| format!("loading {}", input.display()))?;
    let c = &problem.config;
    println!(
        "Grid {}x{}  |  vehicles {}  |  deadline {}  |  capacity {}",
        c.rows, c.cols, c.vehicle_count, c.deadline, c.capacity
    );
    println!(
        "Products {}  |  depots {}  |  orders {}",
        problem.catalog.len(),
        problem.depots.len(),
        problem.orders.len()
    );
    println!();

    // 2. Build.
    let mut sim = SimBuilder::new(problem).build()?;

    // 3. Output.
    std::fs::create_dir_all(CSV_DIR)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new(CSV_DIR))?);

    // 4. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        tracing::warn!(error = %e, "CSV output incomplete");
    }

    let written = SubmissionWriter::create(&output)
        .and_then(|mut w| w.write_sim(&sim))
        .with_context(|| format!("writing {}", output.display()))?;

    // 5. Report.
    println!("Turns processed : {}", report.turns);
    println!("Dispatches      : {}", report.dispatches);
    println!("Retractions     : {}", report.retractions);
    println!("Idle turns      : {}", report.idle);
    println!("Orders done     : {}", report.completed.len());
    println!("Orders open     : {}", report.open_orders);
    if let Some(t) = report.makespan() {
        println!("Last completion : {t}");
    }
    println!("Score           : {}", report.score());
    println!();
    println!("{written} commands → {}", output.display());
    println!("CSV output      → {CSV_DIR}/");
    println!("Elapsed         : {:.3}s", elapsed.as_secs_f64());

    Ok(())
}
