//! Plain data row types written by output backends.

use atc_monitor::Avn;
use atc_sim::AircraftSnapshot;

/// One aircraft's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSnapshotRow {
    pub tick:           u64,
    pub aircraft_id:    u32,
    pub flight_number:  String,
    pub airline:        String,
    pub kind:           &'static str,
    pub phase:          &'static str,
    pub speed:          f32,
    pub direction:      &'static str,
    pub priority:       &'static str,
    /// `RWY-A`/`RWY-B`/`RWY-C` or `none`.
    pub runway:         &'static str,
    pub violation_flag: bool,
}

impl AircraftSnapshotRow {
    pub fn new(tick: u64, s: &AircraftSnapshot) -> Self {
        Self {
            tick,
            aircraft_id:    s.id.0,
            flight_number:  s.flight_number.clone(),
            airline:        s.airline.clone(),
            kind:           s.kind.as_str(),
            phase:          s.phase.as_str(),
            speed:          s.speed,
            direction:      s.direction.as_str(),
            priority:       s.priority.as_str(),
            runway:         s.runway_name(),
            violation_flag: s.violation_flag,
        }
    }
}

/// Counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub admitted:       u64,
    pub transitions:    u64,
    pub violations:     u64,
    pub faults:         u64,
    pub active:         u64,
}

/// One AVN as it stands at the end of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationRow {
    pub avn_id:         u64,
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub aircraft_id:    u32,
    pub flight_number:  String,
    pub phase:          &'static str,
    pub speed:          f32,
    pub active:         bool,
}

impl From<&Avn> for ViolationRow {
    fn from(avn: &Avn) -> Self {
        Self {
            avn_id:         avn.id.0,
            tick:           avn.issued_at.0,
            unix_time_secs: avn.issued_unix_secs,
            aircraft_id:    avn.aircraft.0,
            flight_number:  avn.flight_number.clone(),
            phase:          avn.phase.as_str(),
            speed:          avn.speed,
            active:         avn.active,
        }
    }
}
