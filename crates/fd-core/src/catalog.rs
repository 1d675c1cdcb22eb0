//! The product catalog: one positive weight per product type.

use crate::{CoreError, CoreResult, ProductId};

/// Static list of product weights, indexed by [`ProductId`].
///
/// Weights never change during a run.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    weights: Vec<u32>,
}

impl Catalog {
    /// Build a catalog, rejecting zero weights.
    pub fn new(weights: Vec<u32>) -> CoreResult<Self> {
        if let Some(i) = weights.iter().position(|&w| w == 0) {
            return Err(CoreError::InvalidWeight { product: ProductId(i as u32), weight: 0 });
        }
        Ok(Self { weights })
    }

    /// Weight of `product`.
    ///
    /// # Panics
    /// Panics if `product` is not in the catalog.  Entity tables are checked
    /// against [`Catalog::check`] before a run starts.
    #[inline]
    pub fn weight(&self, product: ProductId) -> u32 {
        self.weights[product.index()]
    }

    /// Weight of `product`, or `None` if it is unknown.
    #[inline]
    pub fn get(&self, product: ProductId) -> Option<u32> {
        self.weights.get(product.index()).copied()
    }

    pub fn check(&self, product: ProductId) -> CoreResult<()> {
        match self.get(product) {
            Some(_) => Ok(()),
            None    => Err(CoreError::UnknownProduct(product)),
        }
    }

    /// Number of product types.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterator over every `ProductId` in ascending order.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        (0..self.weights.len() as u32).map(ProductId)
    }

    /// Total weight of `qty` units of `product`.
    #[inline]
    pub fn weight_of(&self, product: ProductId, qty: u32) -> u64 {
        u64::from(self.weight(product)) * u64::from(qty)
    }
}
