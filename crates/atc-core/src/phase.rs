//! Flight phases, their speed envelopes, and dwell timings.
//!
//! # Lifecycle graph
//!
//! ```text
//! arrival:    Awaiting → Holding → Approach → Landing → Taxi → AtGate
//! departure:  Awaiting → Taxi → TakeoffRoll → Climb → Cruise → Departure
//! ```
//!
//! `AtGate` (arrivals) and `Departure` are absorbing.  Two edges exist outside
//! the two main paths: a departure-bound aircraft at the gate taxis out, and an
//! arrival-bound aircraft in cruise begins its approach.
//!
//! Speeds are in km/h and are abstract bands, not flight dynamics.

use std::fmt;

use crate::Flow;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// A discrete lifecycle state of an aircraft.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for admission from a queue.  Initial state.
    #[default]
    Awaiting,
    Holding,
    Approach,
    Landing,
    Taxi,
    AtGate,
    TakeoffRoll,
    Climb,
    Cruise,
    Departure,
}

impl Phase {
    /// Every phase, in lifecycle-table order.
    pub const ALL: [Phase; 10] = [
        Phase::Awaiting,
        Phase::Holding,
        Phase::Approach,
        Phase::Landing,
        Phase::Taxi,
        Phase::AtGate,
        Phase::TakeoffRoll,
        Phase::Climb,
        Phase::Cruise,
        Phase::Departure,
    ];

    /// The phase entered when this one is exited, for an aircraft following
    /// `flow`.  `None` means the phase is absorbing for that flow.
    pub fn next(self, flow: Flow) -> Option<Phase> {
        match (self, flow) {
            (Phase::Awaiting, Flow::Arrival)    => Some(Phase::Holding),
            (Phase::Awaiting, Flow::Departure)  => Some(Phase::Taxi),
            (Phase::Holding, _)                 => Some(Phase::Approach),
            (Phase::Approach, _)                => Some(Phase::Landing),
            (Phase::Landing, _)                 => Some(Phase::Taxi),
            (Phase::Taxi, Flow::Arrival)        => Some(Phase::AtGate),
            (Phase::Taxi, Flow::Departure)      => Some(Phase::TakeoffRoll),
            (Phase::AtGate, Flow::Arrival)      => None,
            (Phase::AtGate, Flow::Departure)    => Some(Phase::Taxi),
            (Phase::TakeoffRoll, _)             => Some(Phase::Climb),
            (Phase::Climb, _)                   => Some(Phase::Cruise),
            (Phase::Cruise, Flow::Arrival)      => Some(Phase::Approach),
            (Phase::Cruise, Flow::Departure)    => Some(Phase::Departure),
            (Phase::Departure, _)               => None,
        }
    }

    /// `true` if `self → to` is an edge of the lifecycle graph for `flow`.
    #[inline]
    pub fn can_transition_to(self, to: Phase, flow: Flow) -> bool {
        self.next(flow) == Some(to)
    }

    /// `true` if no further transition fires for `flow`.
    #[inline]
    pub fn is_absorbing(self, flow: Flow) -> bool {
        self.next(flow).is_none()
    }

    /// Ground phases are the only ones eligible for fault removal.
    #[inline]
    pub fn is_ground(self) -> bool {
        matches!(self, Phase::Taxi | Phase::AtGate)
    }

    /// Operational speed envelope, or `None` where speed is not monitored.
    pub fn envelope(self) -> Option<SpeedEnvelope> {
        match self {
            Phase::AtGate      => Some(SpeedEnvelope::at_most(10.0)),
            Phase::Taxi        => Some(SpeedEnvelope::at_most(30.0)),
            Phase::TakeoffRoll => Some(SpeedEnvelope::at_most(290.0)),
            Phase::Climb       => Some(SpeedEnvelope::at_most(463.0)),
            Phase::Cruise      => Some(SpeedEnvelope::between(800.0, 900.0)),
            Phase::Approach    => Some(SpeedEnvelope::between(240.0, 290.0)),
            Phase::Landing     => Some(SpeedEnvelope::at_most(240.0)),
            Phase::Holding     => Some(SpeedEnvelope::at_most(600.0)),
            Phase::Awaiting | Phase::Departure => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Awaiting    => "awaiting",
            Phase::Holding     => "holding",
            Phase::Approach    => "approach",
            Phase::Landing     => "landing",
            Phase::Taxi        => "taxi",
            Phase::AtGate      => "at_gate",
            Phase::TakeoffRoll => "takeoff_roll",
            Phase::Climb       => "climb",
            Phase::Cruise      => "cruise",
            Phase::Departure   => "departure",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SpeedEnvelope ─────────────────────────────────────────────────────────────

/// Inclusive speed band `[min, max]` in km/h.  A speed exactly on a bound is
/// compliant.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedEnvelope {
    pub min: f32,
    pub max: f32,
}

impl SpeedEnvelope {
    pub const fn between(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn at_most(max: f32) -> Self {
        Self { min: 0.0, max }
    }

    #[inline]
    pub fn contains(&self, speed: f32) -> bool {
        speed >= self.min && speed <= self.max
    }

    /// `true` if `speed` lies outside the band.
    #[inline]
    pub fn is_violated(&self, speed: f32) -> bool {
        !self.contains(speed)
    }
}

// ── PhaseTimings ──────────────────────────────────────────────────────────────

/// Dwell duration, in ticks, after which a phase's exit transition fires.
///
/// `Awaiting` has no dwell (admission is runway-driven) and `Departure` is
/// absorbing, so neither has a field here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhaseTimings {
    pub holding:      u64,
    pub approach:     u64,
    pub landing:      u64,
    pub taxi:         u64,
    pub at_gate:      u64,
    pub takeoff_roll: u64,
    pub climb:        u64,
    pub cruise:       u64,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            holding:      2,
            approach:     2,
            landing:      3,
            taxi:         3,
            at_gate:      2,
            takeoff_roll: 5,
            climb:        3,
            cruise:       4,
        }
    }
}

impl PhaseTimings {
    /// Dwell ticks for `phase`, or `None` for phases without a timed exit.
    pub fn dwell(&self, phase: Phase) -> Option<u64> {
        match phase {
            Phase::Holding     => Some(self.holding),
            Phase::Approach    => Some(self.approach),
            Phase::Landing     => Some(self.landing),
            Phase::Taxi        => Some(self.taxi),
            Phase::AtGate      => Some(self.at_gate),
            Phase::TakeoffRoll => Some(self.takeoff_roll),
            Phase::Climb       => Some(self.climb),
            Phase::Cruise      => Some(self.cruise),
            Phase::Awaiting | Phase::Departure => None,
        }
    }
}
