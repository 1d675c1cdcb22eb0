//! `fd-schedule` — the bookkeeping structures the dispatch loop runs on.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ready_queue`] | `ReadyQueue` — one bucket of idle vehicles per turn      |
//! | [`order_book`]  | `OrderBook` — active orders in servicing priority order  |
//! | [`distance`]    | `DistanceTable` — cached depot → order travel times      |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Builds `DistanceTable` rows on Rayon's thread pool.      |

pub mod distance;
pub mod error;
pub mod order_book;
pub mod ready_queue;

#[cfg(test)]
mod tests;

pub use distance::DistanceTable;
pub use error::{ScheduleError, ScheduleResult};
pub use order_book::OrderBook;
pub use ready_queue::ReadyQueue;
