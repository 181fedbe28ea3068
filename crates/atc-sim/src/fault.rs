//! The fault injector: random mechanical failures on the ground.

use atc_core::{AircraftId, Phase, RunwayId, SimRng, Tick};
use atc_fleet::{FleetRngs, FleetStore};
use atc_runway::RunwayManager;

use crate::SimResult;

/// One aircraft removed by a fault.
#[derive(Clone, Debug, PartialEq)]
pub struct FaultEvent {
    pub tick:          Tick,
    pub aircraft:      AircraftId,
    pub flight_number: String,
    pub phase:         Phase,
    /// Runway released on the aircraft's behalf before removal.
    pub released:      Option<RunwayId>,
}

/// Removes at most one ground-phase aircraft per tick with a fixed
/// probability.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaultInjector {
    probability: f64,
}

impl FaultInjector {
    /// `probability` is clamped to `[0, 1]`; NaN and infinities disable the
    /// injector.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_finite() { probability.clamp(0.0, 1.0) } else { 0.0 };
        Self { probability }
    }

    /// An injector that never fires.
    pub fn disabled() -> Self {
        Self::new(0.0)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Roll for a fault and, on a hit, remove one `Taxi`/`AtGate` aircraft
    /// chosen uniformly.
    ///
    /// The runway is released before the record is dropped.  With no
    /// ground-phase aircraft the tick is a no-op.
    pub fn inject(
        &self,
        fleet:   &mut FleetStore,
        rngs:    &mut FleetRngs,
        runways: &mut RunwayManager,
        rng:     &mut SimRng,
        now:     Tick,
    ) -> SimResult<Option<FaultEvent>> {
        if !rng.gen_bool(self.probability) {
            return Ok(None);
        }
        let grounded: Vec<AircraftId> = fleet
            .iter()
            .filter(|a| a.phase.is_ground())
            .map(|a| a.id)
            .collect();
        let Some(&victim) = rng.choose(&grounded) else {
            return Ok(None);
        };

        let released = fleet.release_runway(victim, runways)?;
        let aircraft = fleet.remove(victim, runways)?;
        rngs.remove(victim);

        tracing::info!(
            flight = %aircraft.flight_number,
            phase = %aircraft.phase,
            released = released.map_or("none", RunwayId::name),
            tick = %now,
            "fault removal"
        );
        Ok(Some(FaultEvent {
            tick: now,
            aircraft: victim,
            flight_number: aircraft.flight_number,
            phase: aircraft.phase,
            released,
        }))
    }
}
