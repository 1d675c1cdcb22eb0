//! Unit tests for fd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DepotId, OrderId, ProductId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_input_order() {
        assert!(DepotId(0) < DepotId(1));
        assert!(OrderId(100) > OrderId(99));
    }

    #[test]
    fn display() {
        assert_eq!(ProductId(7).to_string(), "ProductId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Location;

    #[test]
    fn zero_distance() {
        let p = Location::new(4, 9);
        assert_eq!(p.distance(p), 0);
    }

    #[test]
    fn straight_line_is_exact() {
        assert_eq!(Location::new(0, 0).distance(Location::new(0, 3)), 3);
        assert_eq!(Location::new(7, 2).distance(Location::new(2, 2)), 5);
    }

    #[test]
    fn diagonal_rounds_up() {
        // sqrt(2) ≈ 1.414 → 2
        assert_eq!(Location::new(0, 0).distance(Location::new(1, 1)), 2);
        // sqrt(13) ≈ 3.606 → 4
        assert_eq!(Location::new(0, 0).distance(Location::new(2, 3)), 4);
    }

    #[test]
    fn pythagorean_triple_is_exact() {
        assert_eq!(Location::new(0, 0).distance(Location::new(3, 4)), 5);
        assert_eq!(Location::new(10, 10).distance(Location::new(15, 22)), 13);
    }

    #[test]
    fn symmetric() {
        let a = Location::new(3, 17);
        let b = Location::new(40, 1);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn large_grid_does_not_overflow() {
        let a = Location::new(0, 0);
        let b = Location::new(u32::MAX, u32::MAX);
        // sqrt(2) * (2^32 - 1), rounded up.
        assert_eq!(a.distance(b), 6_074_000_999);
    }

    #[test]
    fn within_grid() {
        assert!(Location::new(0, 0).within(1, 1));
        assert!(!Location::new(1, 0).within(1, 1));
        assert!(!Location::new(0, 5).within(10, 5));
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, Location, RunConfig, Turn};

    fn config() -> RunConfig {
        RunConfig { rows: 100, cols: 100, vehicle_count: 3, deadline: 50, capacity: 200 }
    }

    #[test]
    fn turn_arithmetic() {
        let t = Turn(10);
        assert_eq!(t + 5, Turn(15));
        assert_eq!(t.offset(3), Turn(13));
        assert_eq!(Turn(15) - Turn(10), 5u64);
        assert_eq!(Turn(3).to_string(), "T3");
    }

    #[test]
    fn end_turn_is_deadline() {
        assert_eq!(config().end_turn(), Turn(50));
    }

    #[test]
    fn location_checks() {
        let cfg = config();
        assert!(cfg.check_location(Location::new(99, 0)).is_ok());
        assert!(matches!(
            cfg.check_location(Location::new(100, 0)),
            Err(CoreError::OutOfGrid { .. })
        ));
    }

    #[test]
    fn empty_fleet_accepted() {
        let cfg = RunConfig { vehicle_count: 0, ..config() };
        assert!(cfg.validate().is_ok());
        let flat = RunConfig { rows: 0, ..config() };
        assert!(matches!(flat.validate(), Err(CoreError::Config(_))));
    }
}

#[cfg(test)]
mod catalog {
    use crate::{Catalog, CoreError, ProductId};

    #[test]
    fn weights_by_id() {
        let c = Catalog::new(vec![100, 5, 450]).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.weight(ProductId(2)), 450);
        assert_eq!(c.weight_of(ProductId(1), 7), 35);
        assert_eq!(c.product_ids().collect::<Vec<_>>(), vec![ProductId(0), ProductId(1), ProductId(2)]);
    }

    #[test]
    fn zero_weight_rejected() {
        assert_eq!(
            Catalog::new(vec![3, 0]),
            Err(CoreError::InvalidWeight { product: ProductId(1), weight: 0 })
        );
    }

    #[test]
    fn unknown_product() {
        let c = Catalog::new(vec![1]).unwrap();
        assert_eq!(c.get(ProductId(1)), None);
        assert_eq!(c.check(ProductId(1)), Err(CoreError::UnknownProduct(ProductId(1))));
        assert!(c.check(ProductId(0)).is_ok());
    }
}
