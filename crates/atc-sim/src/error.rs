use atc_core::AtcError;
use atc_fleet::FleetError;
use atc_lifecycle::LifecycleError;
use atc_monitor::MonitorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] AtcError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("violation ledger error: {0}")]
    Monitor(#[from] MonitorError),
}

pub type SimResult<T> = Result<T, SimError>;
