//! The greedy assignment policy.
//!
//! For an idle vehicle, walk the active orders in priority order and each
//! order's outstanding products in ascending id order.  For each product,
//! take the stocked depot that minimises
//!
//! ```text
//! distance(vehicle, depot) + distance(depot, order)
//! ```
//!
//! (ties go to the lowest `DepotId`), and move
//! `min(stock, owed, free_capacity / weight)` units.  The first candidate
//! with a non-zero quantity wins.  Products no depot stocks, or too heavy
//! to fit, are skipped.
//!
//! Selection only reads state.  [`Sim`](crate::Sim) applies the result.

use fd_core::{Catalog, DepotId, Location, OrderId, ProductId, Turn};
use fd_fleet::{Depot, Order, Vehicle};
use fd_schedule::{DistanceTable, OrderBook};

/// One load + deliver pair chosen for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub order:    OrderId,
    pub product:  ProductId,
    pub depot:    DepotId,
    pub quantity: u32,
}

/// Outcome of waking one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The pair was kept.  `requeued` is `false` when it finishes exactly at
    /// the deadline, which ends the vehicle's run.
    Assigned {
        assignment: Assignment,
        finish:     Turn,
        requeued:   bool,
    },

    /// The pair would finish after the deadline.  Both commands were
    /// retracted and the vehicle takes no further part in the run.
    Retracted {
        assignment: Assignment,
        finish:     Turn,
    },

    /// Nothing servable.  The vehicle is re-filed for the next turn unless
    /// this was the last one.
    Idle { requeued: bool },
}

/// Choose the next assignment for `vehicle`, or `None` if nothing is
/// servable.
pub fn select(
    vehicle:   &Vehicle,
    book:      &OrderBook,
    orders:    &[Order],
    depots:    &[Depot],
    distances: &DistanceTable,
    catalog:   &Catalog,
) -> Option<Assignment> {
    let free = vehicle.remaining_capacity();

    for order_id in book.iter() {
        let order = &orders[order_id.index()];
        for (product, owed) in order.remaining() {
            let Some(depot) = nearest_stocked(vehicle.location(), order_id, product, depots, distances)
            else {
                continue;
            };

            let fits = free / u64::from(catalog.weight(product));
            let fits = u32::try_from(fits).unwrap_or(u32::MAX);
            let quantity = depot.stock(product).min(owed).min(fits);
            if quantity > 0 {
                return Some(Assignment { order: order_id, product, depot: depot.id, quantity });
            }
        }
    }
    None
}

/// The depot holding `product` with the shortest vehicle → depot → order
/// trip, lowest id first on ties.
fn nearest_stocked<'a>(
    from:      Location,
    order:     OrderId,
    product:   ProductId,
    depots:    &'a [Depot],
    distances: &DistanceTable,
) -> Option<&'a Depot> {
    depots
        .iter()
        .filter(|d| d.stock(product) > 0)
        .min_by_key(|d| (from.distance(d.location) + distances.get(d.id, order), d.id))
}
