//! Grid coordinates and the travel-time metric.
//!
//! Travel time between two cells is the Euclidean distance rounded *up* to
//! a whole number of turns.  The square root is taken in integer arithmetic
//! so the result is exact for any grid size.

use std::fmt;

/// An immutable `(row, col)` grid coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: u32,
    pub col: u32,
}

impl Location {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Turns needed to fly from `self` to `other`: `ceil(sqrt(dr² + dc²))`.
    pub fn distance(self, other: Location) -> u64 {
        // u128: two squared u32 spans can exceed u64::MAX.
        let dr = u128::from(self.row.abs_diff(other.row));
        let dc = u128::from(self.col.abs_diff(other.col));
        let squared = dr * dr + dc * dc;

        let root = squared.isqrt();
        let turns = if root * root == squared { root } else { root + 1 };
        turns as u64
    }

    /// `true` if the cell lies inside a `rows × cols` grid.
    #[inline]
    pub fn within(self, rows: u32, cols: u32) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
