//! `fd-fleet` — the entities the scheduler mutates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`depot`]     | `Depot` — per-product stock with credit/debit               |
//! | [`order`]     | `Order` — per-product outstanding demand                    |
//! | [`vehicle`]   | `Vehicle` — location, payload, load, append-only action log |
//! | [`command`]   | `Command` — one atomic logged action                        |
//! | [`problem`]   | `Problem` — everything a run starts from                    |
//! | [`loader`]    | `load_problem_str`, `load_problem_reader`, `load_problem_file` |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                              |
//!
//! # Ownership model
//!
//! Depots, orders and vehicles are plain records held in `Vec`s by the
//! scheduler and addressed by their typed id.  Entities never hold
//! references to each other: a vehicle operation borrows the one depot or
//! order it touches for the duration of the call.
//!
//! Every operation checks its preconditions before mutating anything, so a
//! call that returns `Err` leaves all state exactly as it was.

pub mod command;
pub mod depot;
pub mod error;
pub mod loader;
pub mod order;
pub mod problem;
pub mod vehicle;


pub use command::Command;
pub use depot::Depot;
pub use error::{FleetError, FleetResult};
pub use loader::{load_problem_file, load_problem_reader, load_problem_str};
pub use order::Order;
pub use problem::Problem;
pub use vehicle::Vehicle;
