//! Logged vehicle actions.

use std::fmt;

use fd_core::{DepotId, OrderId, ProductId, VehicleId};

/// One atomic action in a vehicle's log.
///
/// `Display` renders the submission line for the command, without the
/// trailing newline:
///
/// ```text
/// <vehicle> L <depot> <product> <qty>
/// <vehicle> D <order> <product> <qty>
/// <vehicle> U <depot> <product> <qty>
/// <vehicle> W <turns>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Fly to `depot` and take `quantity` units of `product` on board.
    Load {
        vehicle:  VehicleId,
        depot:    DepotId,
        product:  ProductId,
        quantity: u32,
    },

    /// Fly to `order`'s destination and hand over `quantity` units.
    Deliver {
        vehicle:  VehicleId,
        order:    OrderId,
        product:  ProductId,
        quantity: u32,
    },

    /// Fly to `depot` and return `quantity` units to its stock.
    Restock {
        vehicle:  VehicleId,
        depot:    DepotId,
        product:  ProductId,
        quantity: u32,
    },

    /// Stay put for `turns` turns.
    Wait {
        vehicle: VehicleId,
        turns:   u64,
    },
}

impl Command {
    /// The vehicle that performs this command.
    pub fn vehicle(&self) -> VehicleId {
        match *self {
            Command::Load { vehicle, .. }
            | Command::Deliver { vehicle, .. }
            | Command::Restock { vehicle, .. }
            | Command::Wait { vehicle, .. } => vehicle,
        }
    }

    /// Single-letter tag used in the submission format.
    pub fn tag(&self) -> char {
        match self {
            Command::Load { .. }    => 'L',
            Command::Deliver { .. } => 'D',
            Command::Restock { .. } => 'U',
            Command::Wait { .. }    => 'W',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match *self {
            Command::Load { vehicle, depot, product, quantity }
            | Command::Restock { vehicle, depot, product, quantity } => {
                write!(f, "{} {tag} {} {} {quantity}", vehicle.0, depot.0, product.0)
            }
            Command::Deliver { vehicle, order, product, quantity } => {
                write!(f, "{} {tag} {} {} {quantity}", vehicle.0, order.0, product.0)
            }
            Command::Wait { vehicle, turns } => write!(f, "{} {tag} {turns}", vehicle.0),
        }
    }
}
