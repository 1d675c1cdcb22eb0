//! Fluent builder for constructing a [`Sim`].

use fd_core::{Location, VehicleId};
use fd_fleet::{Problem, Vehicle};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Problem`] — configuration, catalog, depots and orders.
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                   |
/// |------------------------|-------------------------------------------|
/// | `.vehicle_starts(v)`   | Every vehicle at [`Problem::start_location`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(problem).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    problem: Problem,
    starts:  Option<Vec<Location>>,
}

impl SimBuilder {
    pub fn new(problem: Problem) -> Self {
        Self { problem, starts: None }
    }

    /// Park each vehicle at its own cell at turn zero (must be length
    /// `vehicle_count`).
    pub fn vehicle_starts(mut self, starts: Vec<Location>) -> Self {
        self.starts = Some(starts);
        self
    }

    /// Validate the problem, create the fleet, and return a ready-to-run
    /// [`Sim`] with every vehicle idle at turn zero.
    pub fn build(self) -> SimResult<Sim> {
        let home = self.problem.start_location();
        let initial_stock = self.problem.total_stock();
        let Problem { config, catalog, depots, orders } = self.problem;
        config.validate()?;

        // ── Depots ────────────────────────────────────────────────────────
        for (i, depot) in depots.iter().enumerate() {
            if depot.id.index() != i {
                return Err(SimError::Config(format!(
                    "depot at position {i} carries id {}", depot.id.0
                )));
            }
            if depot.stock_levels().len() != catalog.len() {
                return Err(SimError::CountMismatch {
                    expected: catalog.len(),
                    got:      depot.stock_levels().len(),
                    what:     "depot stock vector",
                });
            }
            config.check_location(depot.location)?;
        }

        // ── Orders ────────────────────────────────────────────────────────
        for (i, order) in orders.iter().enumerate() {
            if order.id.index() != i {
                return Err(SimError::Config(format!(
                    "order at position {i} carries id {}", order.id.0
                )));
            }
            for (product, _) in order.remaining() {
                catalog.check(product)?;
            }
            config.check_location(order.destination)?;
        }

        // ── Fleet ─────────────────────────────────────────────────────────
        let vehicle_count = config.vehicle_count as usize;
        let starts = match self.starts {
            Some(s) => {
                if s.len() != vehicle_count {
                    return Err(SimError::CountMismatch {
                        expected: vehicle_count,
                        got:      s.len(),
                        what:     "vehicle starts",
                    });
                }
                s
            }
            None => vec![home; vehicle_count],
        };
        for &start in &starts {
            config.check_location(start)?;
        }

        let vehicles = starts
            .into_iter()
            .enumerate()
            .map(|(i, start)| Vehicle::new(VehicleId(i as u32), start, config.capacity))
            .collect();

        Ok(Sim::new(config, catalog, depots, orders, vehicles, initial_stock))
    }
}
