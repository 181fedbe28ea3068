//! `atc-runway`: the single authority over runway occupancy.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`runway`]    | `Runway`, `Alignment`                                     |
//! | [`manager`]   | `RunwayManager` (occupancy table, acquire/release)        |
//! | [`policy`]    | `RunwayRequest`, allocation rules                         |
//! | [`error`]     | `RunwayError`, `RunwayResult<T>`                          |
//!
//! # Invariants
//!
//! - A runway has at most one holder; an aircraft holds at most one runway.
//! - Occupancy changes only through [`RunwayManager::acquire`] and
//!   [`RunwayManager::release`].  Aircraft store a [`RunwayId`], never a
//!   reference into the table.
//! - A failed allocation is backpressure, not a fault: the caller leaves the
//!   aircraft queued and retries next tick.
//!
//! [`RunwayId`]: atc_core::RunwayId

pub mod error;
pub mod manager;
pub mod policy;
pub mod runway;

#[cfg(test)]
mod tests;

pub use error::{RunwayError, RunwayResult};
pub use manager::RunwayManager;
pub use policy::RunwayRequest;
pub use runway::{Alignment, Runway};
