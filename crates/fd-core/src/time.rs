//! Turn model and run configuration.
//!
//! Time is a monotonically increasing `Turn` counter starting at zero.  The
//! deadline is an *exclusive* bound on the turns in which a vehicle may start
//! acting, and an *inclusive* bound on the turn at which an action may
//! finish.

use std::fmt;

use crate::{CoreError, CoreResult, Location};

// ── Turn ─────────────────────────────────────────────────────────────────────

/// An absolute simulation turn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// Return the turn `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Turn {
        Turn(self.0 + n)
    }

    /// Cast to `usize` for indexing a per-turn array.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl std::ops::Sub for Turn {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Turn) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Problem-wide parameters, read from the header line of a problem file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Grid height.  Every location must satisfy `row < rows`.
    pub rows: u32,

    /// Grid width.  Every location must satisfy `col < cols`.
    pub cols: u32,

    /// Number of vehicles in the fleet.
    pub vehicle_count: u32,

    /// Number of simulated turns.  Actions must finish at or before this turn.
    pub deadline: u64,

    /// Maximum payload weight per vehicle.
    pub capacity: u64,
}

impl RunConfig {
    /// The deadline as a `Turn`.
    #[inline]
    pub fn end_turn(&self) -> Turn {
        Turn(self.deadline)
    }

    /// Check that `location` is on the grid.
    pub fn check_location(&self, location: Location) -> CoreResult<()> {
        if location.within(self.rows, self.cols) {
            Ok(())
        } else {
            Err(CoreError::OutOfGrid { location, rows: self.rows, cols: self.cols })
        }
    }

    /// Reject configurations no run could be built from.
    ///
    /// An empty fleet is valid: the run simply issues no commands.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CoreError::Config(format!(
                "grid {}x{} has no cells", self.rows, self.cols
            )));
        }
        Ok(())
    }
}
