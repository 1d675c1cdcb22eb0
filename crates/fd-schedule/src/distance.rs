//! `DistanceTable` — travel time from every depot to every order.
//!
//! Depots and order destinations never move, so this half of the depot
//! ranking key is computed once before the run.  Rows are per depot.

use fd_core::{DepotId, OrderId};
use fd_fleet::{Depot, Order};

/// Dense `depots × orders` matrix of travel times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    order_count: usize,
    cells:       Vec<u64>,
}

impl DistanceTable {
    /// Compute every depot → order distance.
    ///
    /// With the `parallel` feature, rows are filled on Rayon's thread pool.
    /// The table is identical either way.
    pub fn build(depots: &[Depot], orders: &[Order]) -> Self {
        let row = |depot: &Depot| -> Vec<u64> {
            orders.iter().map(|o| depot.location.distance(o.destination)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<u64>> = depots.iter().map(row).collect();

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<u64>> = {
            use rayon::prelude::*;
            depots.par_iter().map(row).collect()
        };

        Self { order_count: orders.len(), cells: rows.concat() }
    }

    /// Turns from `depot` to `order`'s destination.
    ///
    /// Both ids must come from the tables the distance table was built
    /// from; this is only checked in debug builds.
    #[inline]
    pub fn get(&self, depot: DepotId, order: OrderId) -> u64 {
        debug_assert!(order.index() < self.order_count, "order {order} outside distance table");
        self.cells[depot.index() * self.order_count + order.index()]
    }

    pub fn depot_count(&self) -> usize {
        if self.order_count == 0 { 0 } else { self.cells.len() / self.order_count }
    }

    pub fn order_count(&self) -> usize {
        self.order_count
    }
}
