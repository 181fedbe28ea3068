use atc_core::AvnId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("no AVN with id {0}")]
    UnknownAvn(AvnId),

    #[error("{0} is already inactive")]
    AlreadyInactive(AvnId),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
