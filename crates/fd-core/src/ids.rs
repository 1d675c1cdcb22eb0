//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every entity in the engine is an arena slot: the id *is* the index into
//! the owning `Vec`.  The inner integer is `pub` so writers can emit the raw
//! number, but indexing code should go through `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a vehicle in the scheduler's vehicle table.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a depot, in input order.
    pub struct DepotId(u32);
}

typed_id! {
    /// Index of an order, in input order.
    pub struct OrderId(u32);
}

typed_id! {
    /// Product type.  Doubles as the index into [`Catalog`](crate::Catalog).
    pub struct ProductId(u32);
}
