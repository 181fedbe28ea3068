//! Scheduler-wide error type.
//!
//! Sub-crates define their own error enums and wrap `AtcError` (or convert
//! into it) where a shared variant fits.

use thiserror::Error;

use crate::AircraftId;

/// The top-level error type for `atc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AtcError {
    #[error("aircraft {0} not found")]
    AircraftNotFound(AircraftId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `atc-core`.
pub type AtcResult<T> = Result<T, AtcError>;
