//! The default phase model: timed exits and per-phase speed profiles.
//!
//! # Speed profiles (km/h)
//!
//! | Phase       | Entry          | Each tick in phase                 |
//! |-------------|----------------|------------------------------------|
//! | Holding     | 400–600        | resample 400–600                   |
//! | Approach    | 240–290        | resample 240–290                   |
//! | Landing     | 240            | −40, exits early below 30          |
//! | Taxi        | 15–30          | resample 15–30                     |
//! | AtGate      | 0              | 0                                  |
//! | TakeoffRoll | 0              | +75, flags itself above 290        |
//! | Climb       | 250–463        | resample 250–463                   |
//! | Cruise      | 800–900        | resample 800–900                   |
//! | Departure   | last speed     | unchanged                          |
//!
//! Every sampled band lies inside its phase envelope, so a default run only
//! produces violations from the takeoff roll overshooting.

use atc_core::{AircraftId, AircraftRng, Phase};
use atc_fleet::Aircraft;

use crate::{Intent, LifecycleError, LifecycleResult, PhaseModel, TickContext, releases_runway_on_exit};

const HOLDING_BAND:  (f32, f32) = (400.0, 600.0);
const APPROACH_BAND: (f32, f32) = (240.0, 290.0);
const TAXI_BAND:     (f32, f32) = (15.0, 30.0);
const CLIMB_BAND:    (f32, f32) = (250.0, 463.0);
const CRUISE_BAND:   (f32, f32) = (800.0, 900.0);

const LANDING_TOUCHDOWN_SPEED: f32 = 240.0;
/// Takeoff-roll speed above which the roll flags itself.
const ROTATION_LIMIT:          f32 = 290.0;

/// Dwell-timed lifecycle with sampled speed bands.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardPhaseModel {
    /// km/h shed per tick while landing.
    pub landing_decel:      f32,
    /// Landing ends early once speed drops below this.
    pub landing_exit_speed: f32,
    /// km/h gained per tick on the takeoff roll.
    pub roll_accel:         f32,
}

impl Default for StandardPhaseModel {
    fn default() -> Self {
        Self {
            landing_decel:      40.0,
            landing_exit_speed: 30.0,
            roll_accel:         75.0,
        }
    }
}

impl StandardPhaseModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with custom landing deceleration and takeoff acceleration.
    pub fn with_rates(landing_decel: f32, roll_accel: f32) -> LifecycleResult<Self> {
        let positive = |r: f32| r.is_finite() && r > 0.0;
        if !positive(landing_decel) || !positive(roll_accel) {
            return Err(LifecycleError::Config(format!(
                "rates must be positive (landing_decel={landing_decel}, roll_accel={roll_accel})"
            )));
        }
        Ok(Self { landing_decel, roll_accel, ..Self::default() })
    }

    fn sample(band: (f32, f32), rng: &mut AircraftRng) -> f32 {
        rng.gen_range(band.0..=band.1)
    }

    /// `true` once `aircraft` should leave its current phase at `ctx.tick`.
    fn exit_due(&self, aircraft: &Aircraft, ctx: &TickContext<'_>) -> bool {
        let Some(dwell) = ctx.timings.dwell(aircraft.phase) else {
            return false;
        };
        if aircraft.ticks_in_phase(ctx.tick) >= dwell {
            return true;
        }
        aircraft.phase == Phase::Landing && aircraft.speed < self.landing_exit_speed
    }

    /// Speed after one more tick in the current phase.
    fn in_phase_speed(&self, aircraft: &Aircraft, rng: &mut AircraftRng) -> f32 {
        match aircraft.phase {
            Phase::Holding     => Self::sample(HOLDING_BAND, rng),
            Phase::Approach    => Self::sample(APPROACH_BAND, rng),
            Phase::Landing     => (aircraft.speed - self.landing_decel).max(0.0),
            Phase::Taxi        => Self::sample(TAXI_BAND, rng),
            Phase::AtGate      => 0.0,
            Phase::TakeoffRoll => aircraft.speed + self.roll_accel,
            Phase::Climb       => Self::sample(CLIMB_BAND, rng),
            Phase::Cruise      => Self::sample(CRUISE_BAND, rng),
            Phase::Awaiting | Phase::Departure => aircraft.speed,
        }
    }
}

impl PhaseModel for StandardPhaseModel {
    fn advance(
        &self,
        aircraft: AircraftId,
        ctx:      &TickContext<'_>,
        rng:      &mut AircraftRng,
    ) -> Vec<Intent> {
        let Some(a) = ctx.fleet.get(aircraft) else {
            return vec![];
        };
        if a.phase == Phase::Awaiting || a.phase.is_absorbing(a.flow()) {
            return vec![];
        }

        if self.exit_due(a, ctx) {
            if let Some(next) = a.phase.next(a.flow()) {
                let mut intents = Vec::with_capacity(3);
                if releases_runway_on_exit(a.phase) {
                    intents.push(Intent::ReleaseRunway);
                }
                intents.push(Intent::EnterPhase(next));
                intents.push(Intent::SetSpeed(self.entry_speed(a, next, rng)));
                return intents;
            }
        }

        let speed = self.in_phase_speed(a, rng);
        let mut intents = vec![Intent::SetSpeed(speed)];
        if a.phase == Phase::TakeoffRoll && speed > ROTATION_LIMIT {
            intents.push(Intent::FlagViolation);
        }
        intents
    }

    fn entry_speed(&self, aircraft: &Aircraft, phase: Phase, rng: &mut AircraftRng) -> f32 {
        match phase {
            Phase::Holding     => Self::sample(HOLDING_BAND, rng),
            Phase::Approach    => Self::sample(APPROACH_BAND, rng),
            Phase::Landing     => LANDING_TOUCHDOWN_SPEED,
            Phase::Taxi        => Self::sample(TAXI_BAND, rng),
            Phase::AtGate      => 0.0,
            Phase::TakeoffRoll => 0.0,
            Phase::Climb       => Self::sample(CLIMB_BAND, rng),
            Phase::Cruise      => Self::sample(CRUISE_BAND, rng),
            Phase::Awaiting | Phase::Departure => aircraft.speed,
        }
    }
}
