//! The `Sim` struct and its turn loop.

use fd_core::{Catalog, RunConfig, Turn, VehicleId};
use fd_fleet::{Command, Depot, Order, Vehicle};
use fd_schedule::{DistanceTable, OrderBook, ReadyQueue};

use crate::policy::{self, Dispatch};
use crate::{RunReport, SimError, SimObserver, SimResult, TurnSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The dispatch simulation.
///
/// Owns every depot, order and vehicle (each addressed by its id as an
/// index), the ready queue, and the active order book.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Grid size, fleet size, deadline, capacity.
    pub config: RunConfig,

    pub catalog: Catalog,

    /// Depots in input order.
    pub depots: Vec<Depot>,

    /// Every order in input order, including completed ones.
    pub orders: Vec<Order>,

    /// Vehicles in id order.
    pub vehicles: Vec<Vehicle>,

    /// Idle vehicles by the turn they become free.
    pub ready: ReadyQueue,

    /// Active orders in priority order.
    pub book: OrderBook,

    /// Static depot → order distances.
    pub distances: DistanceTable,

    /// The next turn to process.
    pub clock: Turn,

    /// Per-product units held by all depots at build time.
    pub(crate) initial_stock: Vec<u64>,

    /// Per-product units owed by all orders at build time.
    pub(crate) initial_owed: Vec<u64>,

    report: RunReport,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current turn to the deadline and return the report.
    ///
    /// Calls observer hooks at every turn boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// # Errors
    /// An invariant violation inside a depot, order or vehicle operation
    /// aborts the run with [`SimError::Fleet`].  Such errors mean the policy
    /// proposed an impossible action.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        tracing::info!(
            vehicles = self.vehicles.len(),
            depots   = self.depots.len(),
            orders   = self.book.len(),
            deadline = self.config.deadline,
            "dispatch run starting"
        );

        while self.clock < self.config.end_turn() {
            self.step(observer)?;
        }

        if cfg!(debug_assertions) {
            self.verify()?;
        }

        self.report.commands = self.command_count();
        self.report.open_orders = self.book.len();
        observer.on_sim_end(self.clock, &self.report);

        tracing::info!(
            dispatches  = self.report.dispatches,
            retractions = self.report.retractions,
            commands    = self.report.commands,
            completed   = self.report.completed.len(),
            open        = self.report.open_orders,
            score       = self.report.score(),
            "dispatch run finished"
        );
        Ok(self.report.clone())
    }

    /// Process exactly `n` turns from the current position, stopping early
    /// at the deadline.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_turns<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.clock >= self.config.end_turn() {
                break;
            }
            self.step(observer)?;
        }
        Ok(())
    }

    /// Statistics accumulated so far.  `commands` and `open_orders` are
    /// only filled in by [`run`](Self::run).
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Every logged command, grouped by vehicle in id order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.vehicles.iter().flat_map(|v| v.commands())
    }

    pub fn command_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.command_count()).sum()
    }

    /// Check the global invariants: non-negative quantities (guaranteed by
    /// the unsigned types), `current_load` equal to the weighted payload and
    /// within capacity, and conservation of goods per product.
    pub fn verify(&self) -> SimResult<()> {
        for v in &self.vehicles {
            let weighed = v.payload_weight(&self.catalog);
            if weighed != v.current_load() {
                return Err(SimError::Invariant(format!(
                    "vehicle {} load {} but payload weighs {weighed}", v.id, v.current_load()
                )));
            }
            if v.current_load() > v.capacity() {
                return Err(SimError::Invariant(format!(
                    "vehicle {} load {} exceeds capacity {}", v.id, v.current_load(), v.capacity()
                )));
            }
        }

        for p in self.catalog.product_ids() {
            let i = p.index();
            let in_depots: u64 = self.depots.iter().map(|d| u64::from(d.stock(p))).sum();
            let on_board: u64 = self.vehicles.iter().map(|v| u64::from(v.carried(p))).sum();
            let owed: u64 = self.orders.iter().map(|o| u64::from(o.owed(p))).sum();
            let delivered = self.initial_owed[i].checked_sub(owed).ok_or_else(|| {
                SimError::Invariant(format!("{p} owed grew from {} to {owed}", self.initial_owed[i]))
            })?;
            if in_depots + on_board + delivered != self.initial_stock[i] {
                return Err(SimError::Invariant(format!(
                    "{p}: {in_depots} in depots + {on_board} on board + {delivered} delivered \
                     != {} initial stock",
                    self.initial_stock[i]
                )));
            }
        }
        Ok(())
    }

    // ── Crate-private constructor used by SimBuilder ──────────────────────

    pub(crate) fn new(
        config:        RunConfig,
        catalog:       Catalog,
        depots:        Vec<Depot>,
        orders:        Vec<Order>,
        vehicles:      Vec<Vehicle>,
        initial_stock: Vec<u64>,
    ) -> Self {
        let ready = ReadyQueue::with_fleet_ready(config.deadline, vehicles.len());
        let book = OrderBook::new(&orders);
        let distances = DistanceTable::build(&depots, &orders);

        let initial_owed: Vec<u64> = catalog
            .product_ids()
            .map(|p| orders.iter().map(|o| u64::from(o.owed(p))).sum::<u64>())
            .collect();

        let report = RunReport { deadline: config.deadline, ..RunReport::default() };

        Self {
            config,
            catalog,
            depots,
            orders,
            vehicles,
            ready,
            book,
            distances,
            clock: Turn::ZERO,
            initial_stock,
            initial_owed,
            report,
        }
    }

    // ── Core turn processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_turn_start(now);
        let summary = self.process_turn(now, observer)?;
        observer.on_turn_end(now, &summary);
        self.clock = now + 1;
        self.report.turns += 1;
        Ok(())
    }

    fn process_turn<O: SimObserver>(&mut self, now: Turn, observer: &mut O) -> SimResult<TurnSummary> {
        // ── Phase 1: drain the ready queue ────────────────────────────────
        let woken = self.ready.drain_turn(now);
        let mut summary = TurnSummary { woken: woken.len(), ..TurnSummary::default() };

        // ── Phase 2: dispatch, strictly in bucket order ───────────────────
        for vehicle in woken {
            let dispatch = self.dispatch(vehicle, now)?;
            match dispatch {
                Dispatch::Assigned { .. } => summary.dispatched += 1,
                Dispatch::Retracted { .. } => summary.retracted += 1,
                Dispatch::Idle { .. } => summary.idle += 1,
            }
            observer.on_dispatch(now, vehicle, &dispatch);
        }

        // ── Phase 3: drop completed orders, restore priority order ────────
        summary.completed = self.book.refresh(&self.orders).len();
        summary.active = self.book.len();

        self.report.dispatches += summary.dispatched;
        self.report.retractions += summary.retracted;
        self.report.idle += summary.idle;
        Ok(summary)
    }

    /// Find and apply one assignment for `vehicle`, woken at `now`.
    fn dispatch(&mut self, vehicle: VehicleId, now: Turn) -> SimResult<Dispatch> {
        let end = self.config.end_turn();
        let v = &mut self.vehicles[vehicle.index()];

        let Some(assignment) = policy::select(
            v, &self.book, &self.orders, &self.depots, &self.distances, &self.catalog,
        ) else {
            let requeued = now + 1 < end;
            if requeued {
                self.ready.push(now + 1, vehicle)?;
            }
            tracing::trace!(%vehicle, turn = now.0, requeued, "idle");
            return Ok(Dispatch::Idle { requeued });
        };

        let to_depot = v.load(
            &mut self.depots[assignment.depot.index()],
            assignment.product,
            assignment.quantity,
            &self.catalog,
        )?;
        let to_order = v.deliver(
            &mut self.orders[assignment.order.index()],
            assignment.product,
            assignment.quantity,
            &self.catalog,
        )?;
        debug_assert_eq!(v.current_load(), v.payload_weight(&self.catalog));
        self.book.touch();

        let finish = now + to_depot + to_order;

        if finish > end {
            // The load + deliver pair is one tentative action: undo both,
            // newest first.
            v.retract_last_command(&mut self.depots, &mut self.orders, &self.catalog)?;
            v.retract_last_command(&mut self.depots, &mut self.orders, &self.catalog)?;
            tracing::debug!(
                %vehicle,
                turn = now.0,
                finish = finish.0,
                deadline = end.0,
                "assignment overruns deadline, retracted"
            );
            return Ok(Dispatch::Retracted { assignment, finish });
        }

        let requeued = finish < end;
        if requeued {
            self.ready.push(finish, vehicle)?;
        }
        if self.orders[assignment.order.index()].is_complete() {
            self.report.completed.push((assignment.order, finish));
        }

        tracing::debug!(
            %vehicle,
            turn     = now.0,
            order    = assignment.order.0,
            depot    = assignment.depot.0,
            product  = assignment.product.0,
            quantity = assignment.quantity,
            finish   = finish.0,
            "dispatched"
        );
        Ok(Dispatch::Assigned { assignment, finish, requeued })
    }
}
