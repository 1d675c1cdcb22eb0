//! Depots: fixed-location stock sources.

use fd_core::{DepotId, Location, ProductId};

use crate::{FleetError, FleetResult};

/// A stock source at a fixed grid cell.
///
/// `stock` is indexed by `ProductId`; products past the end of the vector
/// are held in zero quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depot {
    pub id:       DepotId,
    pub location: Location,
    stock:        Vec<u32>,
}

impl Depot {
    pub fn new(id: DepotId, location: Location, stock: Vec<u32>) -> Self {
        Self { id, location, stock }
    }

    /// Units of `product` on hand.
    #[inline]
    pub fn stock(&self, product: ProductId) -> u32 {
        self.stock.get(product.index()).copied().unwrap_or(0)
    }

    /// The full stock vector, indexed by `ProductId`.
    pub fn stock_levels(&self) -> &[u32] {
        &self.stock
    }

    /// Add `qty` units of `product`.
    pub fn credit(&mut self, product: ProductId, qty: u32) {
        let i = product.index();
        if i >= self.stock.len() {
            self.stock.resize(i + 1, 0);
        }
        self.stock[i] += qty;
    }

    /// Remove `qty` units of `product`.
    ///
    /// # Errors
    /// [`FleetError::InsufficientStock`] if fewer than `qty` units are held.
    pub fn debit(&mut self, product: ProductId, qty: u32) -> FleetResult<()> {
        let available = self.stock(product);
        if qty > available {
            return Err(FleetError::InsufficientStock {
                depot: self.id,
                product,
                requested: qty,
                available,
            });
        }
        if qty > 0 {
            self.stock[product.index()] = available - qty;
        }
        Ok(())
    }
}
