//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{Location, ProductId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("product {product} has non-positive weight {weight}")]
    InvalidWeight { product: ProductId, weight: u32 },

    #[error("location {location} lies outside the {rows}x{cols} grid")]
    OutOfGrid { location: Location, rows: u32, cols: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
