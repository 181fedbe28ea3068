use atc_core::{AircraftId, RunwayId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunwayError {
    /// No runway could be granted under the allocation policy.  The aircraft
    /// stays queued.
    #[error("no runway available for {0}")]
    Unavailable(AircraftId),

    #[error("{runway} is already held by {holder}")]
    Occupied {
        runway: RunwayId,
        holder: AircraftId,
    },

    #[error("{aircraft} already holds {runway}")]
    AlreadyHolding {
        aircraft: AircraftId,
        runway:   RunwayId,
    },

    #[error("{0} is not held")]
    NotHeld(RunwayId),

    #[error("{caller} cannot release {runway}: held by {holder}")]
    InvalidRelease {
        runway: RunwayId,
        caller: AircraftId,
        holder: AircraftId,
    },

    #[error("unknown runway {0}")]
    UnknownRunway(RunwayId),
}

pub type RunwayResult<T> = Result<T, RunwayError>;
