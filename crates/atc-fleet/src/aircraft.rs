//! The aircraft record.

use atc_core::{
    AircraftId, AircraftKind, AirlineKind, Direction, Flow, Phase, Priority, RunwayId, Tick,
};
use atc_runway::RunwayRequest;

/// Everything needed to put a new aircraft into the table.  The id, phase,
/// and speed are filled in by [`FleetStore::insert`][crate::FleetStore::insert].
#[derive(Clone, Debug, PartialEq)]
pub struct AircraftSpec {
    pub flight_number: String,
    /// Roster code of the operating airline.
    pub airline:       String,
    pub category:      AirlineKind,
    pub direction:     Direction,
    pub priority:      Priority,
    pub scheduled:     Tick,
}

/// One aircraft's full state.
///
/// Phase, speed, and the violation flag are written by the lifecycle apply
/// phase and the violation monitor.  The held runway is private to this crate
/// and only changes together with the runway manager's table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    pub id:             AircraftId,
    pub flight_number:  String,
    pub airline:        String,
    pub category:       AirlineKind,
    pub kind:           AircraftKind,
    pub phase:          Phase,
    /// km/h.
    pub speed:          f32,
    pub direction:      Direction,
    pub priority:       Priority,
    /// Earliest tick at which the aircraft may be admitted.
    pub scheduled:      Tick,
    /// Tick at which `phase` was entered.
    pub phase_entered:  Tick,
    /// Set when a breach was observed and not yet turned into an AVN.
    pub violation_flag: bool,
    pub(crate) runway:  Option<RunwayId>,
}

impl Aircraft {
    pub(crate) fn new(id: AircraftId, spec: AircraftSpec, now: Tick) -> Self {
        Self {
            id,
            kind:           spec.category.aircraft_kind(),
            flight_number:  spec.flight_number,
            airline:        spec.airline,
            category:       spec.category,
            phase:          Phase::Awaiting,
            speed:          0.0,
            direction:      spec.direction,
            priority:       spec.priority,
            scheduled:      spec.scheduled,
            phase_entered:  now,
            violation_flag: false,
            runway:         None,
        }
    }

    #[inline]
    pub fn flow(&self) -> Flow {
        self.direction.flow()
    }

    /// The runway this aircraft holds, if any.
    #[inline]
    pub fn runway(&self) -> Option<RunwayId> {
        self.runway
    }

    /// Ticks spent in the current phase as of `now`.
    #[inline]
    pub fn ticks_in_phase(&self, now: Tick) -> u64 {
        now.since(self.phase_entered)
    }

    /// `true` once the aircraft may join an admission queue at `now`.
    #[inline]
    pub fn is_eligible(&self, now: Tick) -> bool {
        self.phase == Phase::Awaiting && self.scheduled <= now
    }

    /// Build the allocation-policy request for this aircraft.
    pub fn runway_request(&self) -> RunwayRequest {
        RunwayRequest {
            aircraft: self.id,
            flow:     self.flow(),
            priority: self.priority,
            kind:     self.kind,
        }
    }
}
