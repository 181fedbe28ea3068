//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs
//!
//! Phase dwell times, scheduled admission times, and AVN timestamps are all
//! ticks, so schedule arithmetic is exact and comparisons are O(1).

use std::fmt;

use crate::{AtcError, AtcResult, PhaseTimings};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

/// Ticks between two instants, saturating at zero like [`Tick::since`].
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and Unix wall-clock seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// How many real seconds one tick represents.
    pub tick_duration_secs: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start_unix_secs` with the given resolution.
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Unix timestamp corresponding to `tick`.
    #[inline]
    pub fn unix_secs_at(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Current Unix timestamp corresponding to `current_tick`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.unix_secs_at(self.current_tick)
    }

    /// Break elapsed time into (hour, minute, second) components from sim
    /// start.  Hours do not wrap.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs().max(0) as u64;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }

    /// How many ticks span `secs` seconds? (rounds up)
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(self.tick_duration_secs.max(1) as u64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the driver binary and passed to the
/// simulation builder.  Fields after `output_interval_ticks` fall back to
/// their defaults when absent from the file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick.  Default: 60.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a fleet snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Per-tick probability that a ground fault removes one aircraft.
    #[cfg_attr(feature = "serde", serde(default = "default_fault_probability"))]
    pub fault_probability: f64,

    /// Generated flights are scheduled uniformly within this many seconds of
    /// tick 0.
    #[cfg_attr(feature = "serde", serde(default = "default_schedule_window_secs"))]
    pub schedule_window_secs: u64,

    /// Dwell ticks per phase.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timings: PhaseTimings,
}

/// Design default for the ground-fault channel: 5% per tick.
pub const DEFAULT_FAULT_PROBABILITY: f64 = 0.05;

/// Default scheduling window for generated flights: five minutes.
pub const DEFAULT_SCHEDULE_WINDOW_SECS: u64 = 300;

#[cfg(feature = "serde")]
fn default_fault_probability() -> f64 {
    DEFAULT_FAULT_PROBABILITY
}

#[cfg(feature = "serde")]
fn default_schedule_window_secs() -> u64 {
    DEFAULT_SCHEDULE_WINDOW_SECS
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:       0,
            tick_duration_secs:    60,
            total_ticks:           120,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 1,
            fault_probability:     DEFAULT_FAULT_PROBABILITY,
            schedule_window_secs:  DEFAULT_SCHEDULE_WINDOW_SECS,
            timings:               PhaseTimings::default(),
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Reject values the tick loop cannot run with.
    pub fn validate(&self) -> AtcResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(AtcError::Config("tick_duration_secs must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.fault_probability) {
            return Err(AtcError::Config(format!(
                "fault_probability {} is outside [0, 1]",
                self.fault_probability
            )));
        }
        Ok(())
    }
}
