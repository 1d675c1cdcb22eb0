//! Orders: outstanding per-product demand at a destination.

use std::collections::BTreeMap;

use fd_core::{Location, OrderId, ProductId};

use crate::{FleetError, FleetResult};

/// A delivery destination and the quantities it is still owed.
///
/// `owed` only ever holds non-zero entries: an entry that reaches zero is
/// removed, so iteration yields exactly the products still outstanding, in
/// ascending `ProductId` order.  The order is complete once `owed` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:          OrderId,
    pub destination: Location,
    owed:            BTreeMap<ProductId, u32>,
}

impl Order {
    /// Build an order from explicit quantities.  Zero entries are dropped.
    pub fn new(id: OrderId, destination: Location, owed: BTreeMap<ProductId, u32>) -> Self {
        let owed = owed.into_iter().filter(|&(_, q)| q > 0).collect();
        Self { id, destination, owed }
    }

    /// Build an order from a multiset of requested items (one `ProductId`
    /// per unit).
    pub fn from_items(id: OrderId, destination: Location, items: &[ProductId]) -> Self {
        let mut owed = BTreeMap::new();
        for &p in items {
            *owed.entry(p).or_insert(0) += 1;
        }
        Self { id, destination, owed }
    }

    /// Units of `product` still owed.
    #[inline]
    pub fn owed(&self, product: ProductId) -> u32 {
        self.owed.get(&product).copied().unwrap_or(0)
    }

    /// Outstanding `(product, qty)` pairs in ascending product order.
    pub fn remaining(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.owed.iter().map(|(&p, &q)| (p, q))
    }

    /// Sum of all owed quantities.  Used as the servicing priority key.
    pub fn outstanding(&self) -> u64 {
        self.owed.values().map(|&q| u64::from(q)).sum()
    }

    /// `true` once nothing is owed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.owed.is_empty()
    }

    /// Record that `qty` units of `product` were supplied.
    ///
    /// # Errors
    /// [`FleetError::OverSupply`] if `qty` exceeds what is owed.
    pub fn decrement(&mut self, product: ProductId, qty: u32) -> FleetResult<()> {
        let owed = self.owed(product);
        if qty > owed {
            return Err(FleetError::OverSupply { order: self.id, product, supplied: qty, owed });
        }
        if qty == owed {
            self.owed.remove(&product);
        } else {
            self.owed.insert(product, owed - qty);
        }
        Ok(())
    }

    /// Undo a [`decrement`](Self::decrement) of `qty` units of `product`.
    pub fn restore(&mut self, product: ProductId, qty: u32) {
        if qty > 0 {
            *self.owed.entry(product).or_insert(0) += qty;
        }
    }
}
