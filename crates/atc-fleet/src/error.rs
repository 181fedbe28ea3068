use atc_core::{AircraftId, AtcError, RunwayId};
use atc_runway::RunwayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error(transparent)]
    Core(#[from] AtcError),

    #[error("runway error: {0}")]
    Runway(#[from] RunwayError),

    /// An aircraft was about to leave the table while still holding a runway.
    #[error("{aircraft} would be removed while holding {runway}")]
    OrphanedResource {
        aircraft: AircraftId,
        runway:   RunwayId,
    },

    #[error("unknown airline {0:?}")]
    UnknownAirline(String),

    #[error("flight number {0:?} is already in service")]
    DuplicateFlight(String),

    #[error("airline {airline:?} has all {fleet_size} aircraft in service")]
    FleetCapacity {
        airline:    String,
        fleet_size: u32,
    },

    #[error("invalid roster: {0}")]
    Roster(String),

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
