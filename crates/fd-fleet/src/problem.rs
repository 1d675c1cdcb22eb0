//! The complete input to a dispatch run.

use fd_core::{Catalog, Location, RunConfig};

use crate::{Depot, Order};

/// Everything a run starts from.
///
/// Depots and orders are stored in input order; their position in the
/// `Vec` equals their id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub config:  RunConfig,
    pub catalog: Catalog,
    pub depots:  Vec<Depot>,
    pub orders:  Vec<Order>,
}

impl Problem {
    /// Where every vehicle is parked at turn zero: the first depot, or the
    /// grid origin if there are no depots.
    pub fn start_location(&self) -> Location {
        self.depots.first().map(|d| d.location).unwrap_or_default()
    }

    /// Total units of every product held across all depots.
    pub fn total_stock(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.catalog.len()];
        for depot in &self.depots {
            for (i, &q) in depot.stock_levels().iter().enumerate() {
                if let Some(t) = totals.get_mut(i) {
                    *t += u64::from(q);
                }
            }
        }
        totals
    }
}
