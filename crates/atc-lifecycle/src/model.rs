//! The `PhaseModel` trait: how aircraft move through their lifecycle.

use atc_core::{AircraftId, AircraftRng, Phase};
use atc_fleet::Aircraft;

use crate::{Intent, TickContext};

/// Pluggable per-aircraft lifecycle behavior.
///
/// All methods receive read-only state and the aircraft's own
/// [`AircraftRng`], so results do not depend on thread ordering.
///
/// # Thread safety
///
/// atc-sim may call `advance` for many aircraft in parallel via Rayon, so
/// implementations must be `Send + Sync`.  Per-aircraft state lives in the
/// `FleetStore`, never in the model.
pub trait PhaseModel: Send + Sync + 'static {
    /// Called once per tick for every aircraft that has left `Awaiting`.
    ///
    /// Return the intents to commit this tick, in the order they should be
    /// applied.  An empty `Vec` leaves the aircraft unchanged.
    fn advance(
        &self,
        aircraft: AircraftId,
        ctx:      &TickContext<'_>,
        rng:      &mut AircraftRng,
    ) -> Vec<Intent>;

    /// Speed an aircraft takes on when it enters `phase`.
    ///
    /// Used for admissions out of `Awaiting`.  Default: keep the current
    /// speed.
    fn entry_speed(&self, aircraft: &Aircraft, _phase: Phase, _rng: &mut AircraftRng) -> f32 {
        aircraft.speed
    }
}
