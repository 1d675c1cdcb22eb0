//! Fleet error type.
//!
//! The first four variants are invariant violations: the dispatch policy
//! bounds every quantity by stock, demand and free capacity, so they only
//! surface if that policy is wrong.

use fd_core::{CoreError, DepotId, OrderId, ProductId, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("depot {depot} holds {available} of {product}, cannot debit {requested}")]
    InsufficientStock {
        depot:     DepotId,
        product:   ProductId,
        requested: u32,
        available: u32,
    },

    #[error("order {order} owes {owed} of {product}, cannot accept {supplied}")]
    OverSupply {
        order:    OrderId,
        product:  ProductId,
        supplied: u32,
        owed:     u32,
    },

    #[error("vehicle {vehicle} would carry {load}, over its capacity of {capacity}")]
    CapacityExceeded {
        vehicle:  VehicleId,
        load:     u64,
        capacity: u64,
    },

    #[error("vehicle {vehicle} carries {carried} of {product}, cannot unload {requested}")]
    Underflow {
        vehicle:   VehicleId,
        product:   ProductId,
        requested: u32,
        carried:   u32,
    },

    #[error("vehicle {0} has no command to retract")]
    NothingToRetract(VehicleId),

    #[error("depot {0} not found")]
    UnknownDepot(DepotId),

    #[error("order {0} not found")]
    UnknownOrder(OrderId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("problem parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
