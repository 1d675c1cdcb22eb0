//! `fd-sim` — turn loop orchestrator for the fleet-dispatch engine.
//!
//! # Turn loop
//!
//! ```text
//! for turn in 0..deadline:
//!   ① Wake      — drain the vehicles that are idle at this turn, in
//!                 filing order.
//!   ② Dispatch  — for each woken vehicle, in that order:
//!                   pick (order, product, depot, qty) greedily
//!                   load + deliver, compute finish turn
//!                   finish <  deadline → file the vehicle under finish
//!                   finish == deadline → vehicle is done
//!                   finish >  deadline → retract both commands, drop vehicle
//!                   nothing to do      → file under turn + 1 (not on the
//!                                        last turn)
//!   ③ Refresh   — drop completed orders, re-sort the rest by priority.
//! ```
//!
//! Dispatch is strictly sequential: each vehicle sees the stock and demand
//! left behind by the vehicles before it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fd_fleet::load_problem_file;
//! use fd_sim::{NoopObserver, SimBuilder};
//!
//! let problem = load_problem_file(path)?;
//! let mut sim = SimBuilder::new(problem).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("score {}", report.score());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod policy;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use policy::{Assignment, Dispatch};
pub use report::{RunReport, TurnSummary};
pub use sim::Sim;
