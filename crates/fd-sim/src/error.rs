use fd_core::CoreError;
use fd_fleet::FleetError;
use fd_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match expected {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("fleet invariant violated: {0}")]
    Fleet(#[from] FleetError),

    #[error("ready queue error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("state check failed: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
