//! `atc-lifecycle`: the aircraft phase state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`intent`]   | `Intent` enum (`SetSpeed`, `FlagViolation`, `ReleaseRunway`, `EnterPhase`) |
//! | [`context`]  | `TickContext<'a>`: read-only tick snapshot shared by all aircraft |
//! | [`model`]    | `PhaseModel` trait                                                |
//! | [`standard`] | `StandardPhaseModel`: dwell timings and speed profiles           |
//! | [`noop`]     | `NoopPhaseModel`: never produces intents                         |
//! | [`apply`]    | `apply_intents`, `admit`, `Applied`, `Admission`                  |
//! | [`error`]    | `LifecycleError`, `LifecycleResult<T>`                            |
//!
//! # Design notes
//!
//! A tick advances aircraft in two steps:
//!
//! 1. **Intent step** (parallel under atc-sim's `parallel` feature): for every
//!    admitted aircraft, call `PhaseModel::advance` against a read-only
//!    `TickContext` and the aircraft's own RNG.
//!
//! 2. **Apply step** (sequential, ascending id): [`apply_intents`] commits
//!    speeds, flags, runway releases, and phase entries.  Every phase entry
//!    is checked against the lifecycle graph; an illegal one is logged and
//!    skipped.
//!
//! Leaving `Awaiting` is not an intent.  It happens only through [`admit`],
//! which needs a runway grant from the `RunwayManager`.

pub mod apply;
pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod standard;


pub use apply::{
    Admission, Applied, admission_phase, admit, apply_intents, releases_runway_on_exit,
    validate_transition,
};
pub use context::TickContext;
pub use error::{LifecycleError, LifecycleResult};
pub use intent::Intent;
pub use model::PhaseModel;
pub use noop::NoopPhaseModel;
pub use standard::StandardPhaseModel;
