//! `atc-core`: foundational types for the `atc` airport scheduler.
//!
//! This crate is a dependency of every other `atc-*` crate.  It intentionally
//! has no `atc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`ids`]         | `AircraftId`, `RunwayId`, `AvnId`                           |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                             |
//! | [`rng`]         | `AircraftRng` (per-aircraft), `SimRng` (global)             |
//! | [`kinds`]       | `Direction`, `Flow`, `Priority`, `AirlineKind`, `AircraftKind` |
//! | [`phase`]       | `Phase`, `SpeedEnvelope`, `PhaseTimings`                    |
//! | [`error`]       | `AtcError`, `AtcResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod kinds;
pub mod phase;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AtcError, AtcResult};
pub use ids::{AircraftId, AvnId, RunwayId};
pub use kinds::{AircraftKind, AirlineKind, Direction, Flow, Priority};
pub use phase::{Phase, PhaseTimings, SpeedEnvelope};
pub use rng::{AircraftRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
