//! `fd-core` — foundational types for the fleet-dispatch engine.
//!
//! This crate is a dependency of every other `fd-*` crate.  It has no
//! `fd-*` dependencies and only `thiserror` (plus optional `serde`) from the
//! outside world.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `DepotId`, `OrderId`, `ProductId`        |
//! | [`geo`]         | `Location`, ceil-Euclidean travel distance            |
//! | [`time`]        | `Turn`, `RunConfig`                                   |
//! | [`catalog`]     | `Catalog` (product weights)                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod catalog;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use geo::Location;
pub use ids::{DepotId, OrderId, ProductId, VehicleId};
pub use time::{RunConfig, Turn};
