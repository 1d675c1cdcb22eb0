use fd_core::{Turn, VehicleId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("turn {turn} is past the {horizon}-turn horizon")]
    BeyondHorizon { turn: Turn, horizon: u64 },

    #[error("vehicle {vehicle} is already queued at {turn}")]
    AlreadyQueued { vehicle: VehicleId, turn: Turn },

    #[error("vehicle {0} is not part of the fleet")]
    UnknownVehicle(VehicleId),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
