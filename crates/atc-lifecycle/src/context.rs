//! Read-only simulation state passed to every phase-model callback.

use atc_core::{PhaseTimings, Tick};
use atc_fleet::FleetStore;

/// A read-only snapshot of the fleet at the start of the intent step.
///
/// Built once per tick by atc-sim and shared across all aircraft.  atc-sim
/// never hands out `&mut FleetStore` while a `TickContext` is live.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Every live aircraft as of the start of the tick.
    pub fleet: &'a FleetStore,

    /// Dwell ticks per phase.
    pub timings: &'a PhaseTimings,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, fleet: &'a FleetStore, timings: &'a PhaseTimings) -> Self {
        Self { tick, fleet, timings }
    }
}
