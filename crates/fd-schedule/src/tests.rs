//! Unit tests for fd-schedule.

use fd_core::{DepotId, Location, OrderId, ProductId, Turn, VehicleId};
use fd_fleet::{Depot, Order};

use crate::{DistanceTable, OrderBook, ReadyQueue, ScheduleError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn order(id: u32, owed: &[(u32, u32)]) -> Order {
    Order::new(
        OrderId(id),
        Location::new(id, 0),
        owed.iter().map(|&(p, q)| (ProductId(p), q)).collect(),
    )
}

fn ids(book: &OrderBook) -> Vec<u32> {
    book.iter().map(|o| o.0).collect()
}

// ── ReadyQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ready_queue {
    use super::*;

    #[test]
    fn fleet_starts_in_bucket_zero_in_id_order() {
        let mut q = ReadyQueue::with_fleet_ready(10, 3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.queued_at(VehicleId(2)), Some(Turn(0)));
        assert_eq!(q.drain_turn(Turn(0)), vec![VehicleId(0), VehicleId(1), VehicleId(2)]);
        assert!(q.is_empty());
        assert_eq!(q.queued_at(VehicleId(2)), None);
    }

    #[test]
    fn zero_horizon_queues_nothing() {
        let q = ReadyQueue::with_fleet_ready(0, 4);
        assert!(q.is_empty());
        assert_eq!(q.horizon(), 0);
    }

    #[test]
    fn bucket_preserves_filing_order() {
        let mut q = ReadyQueue::new(10, 3);
        q.push(Turn(5), VehicleId(2)).unwrap();
        q.push(Turn(5), VehicleId(0)).unwrap();
        q.push(Turn(3), VehicleId(1)).unwrap();
        assert_eq!(q.next_turn(Turn(0)), Some(Turn(3)));
        assert_eq!(q.next_turn(Turn(4)), Some(Turn(5)));
        assert_eq!(q.drain_turn(Turn(5)), vec![VehicleId(2), VehicleId(0)]);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn drain_empty_and_out_of_range() {
        let mut q = ReadyQueue::new(3, 1);
        assert!(q.drain_turn(Turn(1)).is_empty());
        assert!(q.drain_turn(Turn(99)).is_empty());
    }

    #[test]
    fn push_past_horizon_rejected() {
        let mut q = ReadyQueue::new(5, 1);
        assert_eq!(
            q.push(Turn(5), VehicleId(0)),
            Err(ScheduleError::BeyondHorizon { turn: Turn(5), horizon: 5 })
        );
        assert!(q.push(Turn(4), VehicleId(0)).is_ok());
    }

    #[test]
    fn vehicle_in_one_bucket_at_a_time() {
        let mut q = ReadyQueue::new(5, 1);
        q.push(Turn(1), VehicleId(0)).unwrap();
        assert_eq!(
            q.push(Turn(2), VehicleId(0)),
            Err(ScheduleError::AlreadyQueued { vehicle: VehicleId(0), turn: Turn(1) })
        );
        q.drain_turn(Turn(1));
        assert!(q.push(Turn(2), VehicleId(0)).is_ok());
    }

    #[test]
    fn unknown_vehicle_rejected() {
        let mut q = ReadyQueue::new(5, 1);
        assert_eq!(
            q.push(Turn(0), VehicleId(1)),
            Err(ScheduleError::UnknownVehicle(VehicleId(1)))
        );
    }
}

// ── OrderBook ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod order_book {
    use super::*;

    #[test]
    fn smallest_outstanding_first_ties_by_id() {
        let orders = vec![
            order(0, &[(0, 3)]),
            order(1, &[(0, 1), (1, 1)]),
            order(2, &[(1, 1)]),
            order(3, &[(2, 2)]),
        ];
        let book = OrderBook::new(&orders);
        assert_eq!(ids(&book), vec![2, 1, 3, 0]);
    }

    #[test]
    fn complete_orders_never_booked() {
        let orders = vec![order(0, &[]), order(1, &[(0, 1)])];
        let book = OrderBook::new(&orders);
        assert_eq!(ids(&book), vec![1]);
        assert!(!book.contains(OrderId(0)));
    }

    #[test]
    fn refresh_prunes_and_resorts() {
        let mut orders = vec![order(0, &[(0, 2)]), order(1, &[(0, 5)]), order(2, &[(0, 4)])];
        let mut book = OrderBook::new(&orders);
        assert_eq!(ids(&book), vec![0, 2, 1]);

        orders[0].decrement(ProductId(0), 2).unwrap();
        orders[1].decrement(ProductId(0), 4).unwrap();

        // Untouched books are left alone.
        assert!(book.refresh(&orders).is_empty());
        assert_eq!(ids(&book), vec![0, 2, 1]);

        book.touch();
        assert!(book.is_dirty());
        assert_eq!(book.refresh(&orders), vec![OrderId(0)]);
        assert_eq!(ids(&book), vec![1, 2]);
        assert!(!book.is_dirty());
    }

    #[test]
    fn equal_keys_fall_back_to_input_order_after_resort() {
        let mut orders = vec![order(0, &[(0, 3)]), order(1, &[(0, 1)])];
        let mut book = OrderBook::new(&orders);
        assert_eq!(ids(&book), vec![1, 0]);

        orders[0].decrement(ProductId(0), 2).unwrap();
        book.touch();
        book.refresh(&orders);
        assert_eq!(ids(&book), vec![0, 1]);
    }
}

// ── DistanceTable ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::*;

    #[test]
    fn matches_direct_distance() {
        let depots = vec![
            Depot::new(DepotId(0), Location::new(0, 0), vec![]),
            Depot::new(DepotId(1), Location::new(6, 8), vec![]),
        ];
        let orders = vec![order(0, &[(0, 1)]), order(3, &[(0, 1)]), order(5, &[(0, 1)])];
        let table = DistanceTable::build(&depots, &orders);

        assert_eq!(table.depot_count(), 2);
        assert_eq!(table.order_count(), 3);
        for d in &depots {
            for (i, o) in orders.iter().enumerate() {
                assert_eq!(
                    table.get(d.id, OrderId(i as u32)),
                    d.location.distance(o.destination)
                );
            }
        }
        assert_eq!(table.get(DepotId(1), OrderId(0)), 10);
    }

    #[test]
    fn empty_tables() {
        let table = DistanceTable::build(&[], &[]);
        assert_eq!(table.depot_count(), 0);
        assert_eq!(table.order_count(), 0);
    }
}
