//! `ReadyQueue` — per-turn buckets of vehicles that become idle.
//!
//! When a vehicle finishes an action it is filed under the turn at which it
//! is free again.  Each turn the dispatch loop drains exactly that bucket,
//! so only idle vehicles are looked at.
//!
//! # Layout
//!
//! A flat array of `horizon` buckets indexed by turn, plus a per-vehicle
//! slot recording which bucket (if any) currently holds it.  Push and drain
//! are O(1) amortized, and a vehicle can never sit in two buckets at once.
//!
//! Bucket order is insertion order.  That order decides which vehicle gets
//! first pick of scarce stock, so it is part of the observable behavior.

use fd_core::{Turn, VehicleId};

use crate::{ScheduleError, ScheduleResult};

/// Turn-indexed buckets of idle vehicles, covering turns `0..horizon`.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    buckets: Vec<Vec<VehicleId>>,
    /// `slots[v]` = the turn whose bucket holds vehicle `v`.
    slots:   Vec<Option<Turn>>,
    /// Cached total vehicle count for O(1) `len()`.
    total:   usize,
}

impl ReadyQueue {
    /// An empty queue for `vehicle_count` vehicles over `horizon` turns.
    pub fn new(horizon: u64, vehicle_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); horizon as usize],
            slots:   vec![None; vehicle_count],
            total:   0,
        }
    }

    /// A queue with the whole fleet idle at turn zero, in ascending id order.
    ///
    /// With a zero horizon nothing is queued.
    pub fn with_fleet_ready(horizon: u64, vehicle_count: usize) -> Self {
        let mut queue = Self::new(horizon, vehicle_count);
        if horizon > 0 {
            for v in 0..vehicle_count as u32 {
                queue.buckets[0].push(VehicleId(v));
                queue.slots[v as usize] = Some(Turn::ZERO);
            }
            queue.total = vehicle_count;
        }
        queue
    }

    /// File `vehicle` under `turn`, behind any vehicle already there.
    ///
    /// # Errors
    /// - [`ScheduleError::BeyondHorizon`] if `turn >= horizon`.
    /// - [`ScheduleError::AlreadyQueued`] if the vehicle sits in a bucket.
    /// - [`ScheduleError::UnknownVehicle`] if the id is out of range.
    pub fn push(&mut self, turn: Turn, vehicle: VehicleId) -> ScheduleResult<()> {
        if turn.index() >= self.buckets.len() {
            return Err(ScheduleError::BeyondHorizon { turn, horizon: self.horizon() });
        }
        let slot = self
            .slots
            .get_mut(vehicle.index())
            .ok_or(ScheduleError::UnknownVehicle(vehicle))?;
        if let Some(queued) = *slot {
            return Err(ScheduleError::AlreadyQueued { vehicle, turn: queued });
        }
        *slot = Some(turn);
        self.buckets[turn.index()].push(vehicle);
        self.total += 1;
        Ok(())
    }

    /// Remove and return the vehicles filed under `turn`, in filing order.
    ///
    /// Turns past the horizon have no bucket and yield an empty `Vec`.
    pub fn drain_turn(&mut self, turn: Turn) -> Vec<VehicleId> {
        let Some(bucket) = self.buckets.get_mut(turn.index()) else {
            return Vec::new();
        };
        let vehicles = std::mem::take(bucket);
        for v in &vehicles {
            self.slots[v.index()] = None;
        }
        self.total -= vehicles.len();
        vehicles
    }

    /// The turn `vehicle` is filed under, if any.
    pub fn queued_at(&self, vehicle: VehicleId) -> Option<Turn> {
        self.slots.get(vehicle.index()).copied().flatten()
    }

    /// The earliest turn at or after `from` with a non-empty bucket.
    pub fn next_turn(&self, from: Turn) -> Option<Turn> {
        self.buckets
            .iter()
            .enumerate()
            .skip(from.index())
            .find(|(_, b)| !b.is_empty())
            .map(|(i, _)| Turn(i as u64))
    }

    /// Number of turns covered.
    pub fn horizon(&self) -> u64 {
        self.buckets.len() as u64
    }

    /// Total number of queued vehicles.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
