//! Read-only per-aircraft rows for status rendering and output.

use atc_core::{AircraftId, AircraftKind, Direction, Phase, Priority, RunwayId};
use atc_fleet::Aircraft;

/// One aircraft's externally visible state at a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AircraftSnapshot {
    pub id:             AircraftId,
    pub flight_number:  String,
    pub airline:        String,
    pub kind:           AircraftKind,
    pub phase:          Phase,
    pub speed:          f32,
    pub direction:      Direction,
    pub priority:       Priority,
    pub runway:         Option<RunwayId>,
    pub violation_flag: bool,
}

impl AircraftSnapshot {
    /// `RWY-A`/`RWY-B`/`RWY-C`, or `none`.
    pub fn runway_name(&self) -> &'static str {
        self.runway.map_or("none", RunwayId::name)
    }
}

impl From<&Aircraft> for AircraftSnapshot {
    fn from(a: &Aircraft) -> Self {
        Self {
            id:             a.id,
            flight_number:  a.flight_number.clone(),
            airline:        a.airline.clone(),
            kind:           a.kind,
            phase:          a.phase,
            speed:          a.speed,
            direction:      a.direction,
            priority:       a.priority,
            runway:         a.runway(),
            violation_flag: a.violation_flag,
        }
    }
}
