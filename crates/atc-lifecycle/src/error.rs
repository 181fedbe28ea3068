use atc_core::{AircraftId, Phase};
use atc_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A phase entry that is not an edge of the lifecycle graph.
    #[error("{aircraft}: illegal transition {from} -> {to}")]
    InvalidTransition {
        aircraft: AircraftId,
        from:     Phase,
        to:       Phase,
    },

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("phase model configuration error: {0}")]
    Config(String),
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
