//! `OrderBook` — the active orders in servicing priority order.
//!
//! Priority is the smallest outstanding quantity first, ties broken by
//! `OrderId` (input order).  The book stores ids only; the orders
//! themselves live in the scheduler's table and are passed in whenever the
//! book needs to look at them.

use fd_core::OrderId;
use fd_fleet::Order;

/// Ids of the orders still being worked on, kept in priority order.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    active: Vec<OrderId>,
    dirty:  bool,
}

impl OrderBook {
    /// Book every incomplete order in `orders`, sorted by priority.
    pub fn new(orders: &[Order]) -> Self {
        let mut active: Vec<OrderId> = orders
            .iter()
            .filter(|o| !o.is_complete())
            .map(|o| o.id)
            .collect();
        sort_by_priority(&mut active, orders);
        Self { active, dirty: false }
    }

    /// Active order ids, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.active.iter().copied()
    }

    pub fn as_slice(&self) -> &[OrderId] {
        &self.active
    }

    /// Note that some order's quantities changed since the last refresh.
    #[inline]
    pub fn touch(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Drop completed orders and re-sort the rest, if anything was touched.
    ///
    /// Returns the ids that were dropped, in their former priority order.
    pub fn refresh(&mut self, orders: &[Order]) -> Vec<OrderId> {
        if !self.dirty {
            return Vec::new();
        }
        self.dirty = false;

        let mut completed = Vec::new();
        self.active.retain(|&id| {
            let done = orders[id.index()].is_complete();
            if done {
                completed.push(id);
            }
            !done
        });
        sort_by_priority(&mut self.active, orders);
        completed
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.active.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

fn sort_by_priority(ids: &mut [OrderId], orders: &[Order]) {
    ids.sort_by_cached_key(|&id| (orders[id.index()].outstanding(), id));
}
