//! Plain data row types written by output backends.

use fd_core::Turn;
use fd_sim::{Assignment, TurnSummary};

/// One kept command, as dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRow {
    /// Turn the vehicle was dispatched.
    pub turn:     u64,
    pub vehicle:  u32,
    /// Submission tag: `'L'` or `'D'`.
    pub kind:     char,
    /// Depot id for a load, order id for a delivery.
    pub target:   u32,
    pub product:  u32,
    pub quantity: u32,
    /// Turn the load + deliver pair completes.
    pub finish:   u64,
}

impl CommandRow {
    /// The load and deliver rows for a kept assignment.
    pub fn pair(turn: Turn, vehicle: u32, a: &Assignment, finish: Turn) -> [CommandRow; 2] {
        let row = |kind, target| CommandRow {
            turn: turn.0,
            vehicle,
            kind,
            target,
            product: a.product.0,
            quantity: a.quantity,
            finish: finish.0,
        };
        [row('L', a.depot.0), row('D', a.order.0)]
    }
}

/// Statistics for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummaryRow {
    pub turn:          u64,
    pub woken:         u64,
    pub dispatched:    u64,
    pub retracted:     u64,
    pub idle:          u64,
    pub completed:     u64,
    pub active_orders: u64,
}

impl TurnSummaryRow {
    pub fn new(turn: Turn, s: &TurnSummary) -> Self {
        Self {
            turn:          turn.0,
            woken:         s.woken as u64,
            dispatched:    s.dispatched as u64,
            retracted:     s.retracted as u64,
            idle:          s.idle as u64,
            completed:     s.completed as u64,
            active_orders: s.active as u64,
        }
    }
}
