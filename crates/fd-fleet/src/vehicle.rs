//! Vehicles: the only actors in the simulation.
//!
//! # Turn cost
//!
//! Every load, deliver and restock first flies to the target cell
//! ([`Location::distance`] turns) and then spends one turn handling goods.
//! `wait(n)` costs `n` turns.  Each operation returns its cost and appends
//! exactly one [`Command`] to the vehicle's log.
//!
//! # Retraction
//!
//! The log remembers where the vehicle stood before each command, so
//! [`Vehicle::retract_last_command`] can put the vehicle, the depot or
//! order it touched, and the log back exactly as they were.

use std::collections::BTreeMap;

use fd_core::{Catalog, Location, ProductId, VehicleId};

use crate::{Command, Depot, FleetError, FleetResult, Order};

/// Turns spent on the ground for every load, deliver, or restock.
pub const HANDLING_TURNS: u64 = 1;

/// A logged command plus what is needed to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct LogEntry {
    command: Command,
    /// Where the vehicle was before flying for this command.
    origin:  Location,
    /// Turns this command took.
    turns:   u64,
}

/// A capacity-limited carrier with an append-only action log.
///
/// `current_load` always equals the weighted sum of `payload`; it is kept up
/// to date incrementally by every operation, never recomputed.  Payload
/// entries that reach zero are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:       VehicleId,
    location:     Location,
    payload:      BTreeMap<ProductId, u32>,
    current_load: u64,
    capacity:     u64,
    log:          Vec<LogEntry>,
}

impl Vehicle {
    /// An empty vehicle parked at `location`.
    pub fn new(id: VehicleId, location: Location, capacity: u64) -> Self {
        Self {
            id,
            location,
            payload: BTreeMap::new(),
            current_load: 0,
            capacity,
            log: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Units of `product` on board.
    #[inline]
    pub fn carried(&self, product: ProductId) -> u32 {
        self.payload.get(&product).copied().unwrap_or(0)
    }

    /// Carried `(product, qty)` pairs in ascending product order.
    pub fn payload(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.payload.iter().map(|(&p, &q)| (p, q))
    }

    #[inline]
    pub fn current_load(&self) -> u64 {
        self.current_load
    }

    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Weight that can still be taken on board.
    #[inline]
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity - self.current_load
    }

    /// Weighted payload recomputed from scratch.  Only for invariant checks:
    /// it must always equal [`current_load`](Self::current_load).
    pub fn payload_weight(&self, catalog: &Catalog) -> u64 {
        self.payload.iter().map(|(&p, &q)| catalog.weight_of(p, q)).sum()
    }

    /// The action log, oldest first.
    pub fn commands(&self) -> impl ExactSizeIterator<Item = &Command> + '_ {
        self.log.iter().map(|e| &e.command)
    }

    pub fn command_count(&self) -> usize {
        self.log.len()
    }

    /// Sum of the turn costs of every logged command.
    pub fn busy_turns(&self) -> u64 {
        self.log.iter().map(|e| e.turns).sum()
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Fly to `depot` and take `qty` units of `product` on board.
    ///
    /// # Errors
    /// - [`FleetError::CapacityExceeded`] if the new load would exceed capacity.
    /// - [`FleetError::InsufficientStock`] if the depot holds fewer than `qty`.
    pub fn load(
        &mut self,
        depot:   &mut Depot,
        product: ProductId,
        qty:     u32,
        catalog: &Catalog,
    ) -> FleetResult<u64> {
        let load = self.current_load + catalog.weight_of(product, qty);
        if load > self.capacity {
            return Err(FleetError::CapacityExceeded {
                vehicle:  self.id,
                load,
                capacity: self.capacity,
            });
        }
        depot.debit(product, qty)?;

        let origin = self.location;
        let turns = self.travel(depot.location) + HANDLING_TURNS;
        self.stow(product, qty);
        self.current_load = load;
        self.record(
            Command::Load { vehicle: self.id, depot: depot.id, product, quantity: qty },
            origin,
            turns,
        );
        Ok(turns)
    }

    /// Fly to `order`'s destination and supply `qty` units of `product`.
    ///
    /// # Errors
    /// - [`FleetError::Underflow`] if fewer than `qty` units are on board.
    /// - [`FleetError::OverSupply`] if the order owes fewer than `qty`.
    pub fn deliver(
        &mut self,
        order:   &mut Order,
        product: ProductId,
        qty:     u32,
        catalog: &Catalog,
    ) -> FleetResult<u64> {
        self.check_carried(product, qty)?;
        order.decrement(product, qty)?;

        let origin = self.location;
        let turns = self.travel(order.destination) + HANDLING_TURNS;
        self.unstow(product, qty);
        self.current_load -= catalog.weight_of(product, qty);
        self.record(
            Command::Deliver { vehicle: self.id, order: order.id, product, quantity: qty },
            origin,
            turns,
        );
        Ok(turns)
    }

    /// Fly to `depot` and return `qty` units of `product` to its stock.
    ///
    /// # Errors
    /// [`FleetError::Underflow`] if fewer than `qty` units are on board.
    pub fn restock(
        &mut self,
        depot:   &mut Depot,
        product: ProductId,
        qty:     u32,
        catalog: &Catalog,
    ) -> FleetResult<u64> {
        self.check_carried(product, qty)?;
        depot.credit(product, qty);

        let origin = self.location;
        let turns = self.travel(depot.location) + HANDLING_TURNS;
        self.unstow(product, qty);
        self.current_load -= catalog.weight_of(product, qty);
        self.record(
            Command::Restock { vehicle: self.id, depot: depot.id, product, quantity: qty },
            origin,
            turns,
        );
        Ok(turns)
    }

    /// Stay put for `turns` turns.
    pub fn wait(&mut self, turns: u64) -> u64 {
        let origin = self.location;
        self.record(Command::Wait { vehicle: self.id, turns }, origin, turns);
        turns
    }

    /// Remove the newest command from the log and reverse its effect on this
    /// vehicle and on the depot or order it touched.
    ///
    /// `depots` and `orders` are the scheduler's tables, indexed by id.
    /// Returns the retracted command.
    ///
    /// # Errors
    /// - [`FleetError::NothingToRetract`] if the log is empty.
    /// - [`FleetError::UnknownDepot`] / [`FleetError::UnknownOrder`] if the
    ///   command names an entity missing from the tables.  The log is left
    ///   untouched in both cases.
    pub fn retract_last_command(
        &mut self,
        depots:  &mut [Depot],
        orders:  &mut [Order],
        catalog: &Catalog,
    ) -> FleetResult<Command> {
        let entry = self.log.last().ok_or(FleetError::NothingToRetract(self.id))?;
        let (command, origin) = (entry.command, entry.origin);

        match command {
            Command::Load { depot, product, quantity, .. } => {
                let depot = depots
                    .get_mut(depot.index())
                    .ok_or(FleetError::UnknownDepot(depot))?;
                self.check_carried(product, quantity)?;
                depot.credit(product, quantity);
                self.unstow(product, quantity);
                self.current_load -= catalog.weight_of(product, quantity);
            }
            Command::Deliver { order, product, quantity, .. } => {
                let order = orders
                    .get_mut(order.index())
                    .ok_or(FleetError::UnknownOrder(order))?;
                order.restore(product, quantity);
                self.stow(product, quantity);
                self.current_load += catalog.weight_of(product, quantity);
            }
            Command::Restock { depot, product, quantity, .. } => {
                let depot = depots
                    .get_mut(depot.index())
                    .ok_or(FleetError::UnknownDepot(depot))?;
                depot.debit(product, quantity)?;
                self.stow(product, quantity);
                self.current_load += catalog.weight_of(product, quantity);
            }
            Command::Wait { .. } => {}
        }

        self.location = origin;
        self.log.pop();
        Ok(command)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Move to `dest`, returning the flight time.
    fn travel(&mut self, dest: Location) -> u64 {
        let turns = self.location.distance(dest);
        self.location = dest;
        turns
    }

    fn check_carried(&self, product: ProductId, qty: u32) -> FleetResult<()> {
        let carried = self.carried(product);
        if qty > carried {
            return Err(FleetError::Underflow { vehicle: self.id, product, requested: qty, carried });
        }
        Ok(())
    }

    fn stow(&mut self, product: ProductId, qty: u32) {
        if qty > 0 {
            *self.payload.entry(product).or_insert(0) += qty;
        }
    }

    /// Caller has already checked `qty <= carried(product)`.
    fn unstow(&mut self, product: ProductId, qty: u32) {
        let left = self.carried(product) - qty;
        if left == 0 {
            self.payload.remove(&product);
        } else {
            self.payload.insert(product, left);
        }
    }

    fn record(&mut self, command: Command, origin: Location, turns: u64) {
        self.log.push(LogEntry { command, origin, turns });
    }
}
