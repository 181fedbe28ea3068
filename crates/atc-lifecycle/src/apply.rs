//! The sequential half of the tick: committing intents and admissions.
//!
//! Both functions take `&mut FleetStore` and `&mut RunwayManager` together,
//! so every runway change and the aircraft's record of it happen in the same
//! call.

use atc_core::{AircraftId, AircraftRng, AtcError, Flow, Phase, RunwayId, Tick};
use atc_fleet::{Aircraft, FleetError, FleetStore};
use atc_runway::{RunwayError, RunwayManager};

use crate::{Intent, LifecycleError, LifecycleResult, PhaseModel};

/// Phases whose exit hands the runway back: an arrival rolling off after
/// landing, a departure lifting off.
#[inline]
pub fn releases_runway_on_exit(phase: Phase) -> bool {
    matches!(phase, Phase::Landing | Phase::TakeoffRoll)
}

/// What [`apply_intents`] changed for one aircraft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Applied {
    /// `(from, to)` if a phase entry was committed.
    pub transition: Option<(Phase, Phase)>,
    pub released:   Option<RunwayId>,
    /// Phase entries rejected as illegal.
    pub rejected:   usize,
}

/// Outcome of an admission attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Granted(RunwayId),
    /// No runway could be granted; the aircraft stays `Awaiting`.
    Blocked,
}

/// Check that `aircraft` may enter `to` through an intent.
///
/// Leaving `Awaiting` is reserved for [`admit`].
pub fn validate_transition(aircraft: &Aircraft, to: Phase) -> LifecycleResult<()> {
    let from = aircraft.phase;
    if from == Phase::Awaiting || !from.can_transition_to(to, aircraft.flow()) {
        return Err(LifecycleError::InvalidTransition { aircraft: aircraft.id, from, to });
    }
    Ok(())
}

/// Commit `intents` for `id` in order.
///
/// Illegal phase entries are logged at `warn` and skipped; the remaining
/// intents still apply.  Errors are reserved for bookkeeping failures
/// (unknown aircraft, runway table disagreement).
pub fn apply_intents(
    id:      AircraftId,
    intents: &[Intent],
    fleet:   &mut FleetStore,
    runways: &mut RunwayManager,
    now:     Tick,
) -> LifecycleResult<Applied> {
    let mut applied = Applied::default();

    for intent in intents {
        match *intent {
            Intent::SetSpeed(speed) => {
                aircraft_mut(fleet, id)?.speed = speed.max(0.0);
            }
            Intent::FlagViolation => {
                aircraft_mut(fleet, id)?.violation_flag = true;
            }
            Intent::ReleaseRunway => {
                if let Some(runway) = fleet.release_runway(id, runways)? {
                    applied.released = Some(runway);
                }
            }
            Intent::EnterPhase(to) => {
                let aircraft = aircraft_mut(fleet, id)?;
                if let Err(err) = validate_transition(aircraft, to) {
                    tracing::warn!(flight = %aircraft.flight_number, %err, "transition rejected");
                    applied.rejected += 1;
                    continue;
                }
                let from = aircraft.phase;
                aircraft.phase = to;
                aircraft.phase_entered = now;
                applied.transition = Some((from, to));
                if to.is_absorbing(aircraft.flow()) {
                    tracing::info!(flight = %aircraft.flight_number, phase = %to, tick = %now, "lifecycle complete");
                } else {
                    tracing::debug!(flight = %aircraft.flight_number, %from, %to, tick = %now, "phase entered");
                }
            }
        }
    }
    Ok(applied)
}

/// Try to move `id` out of `Awaiting` by acquiring a runway.
///
/// On a grant the aircraft enters `Holding` (arrival) or `Taxi` (departure)
/// with the model's entry speed.  A denial is [`Admission::Blocked`], not an
/// error.
pub fn admit<M: PhaseModel + ?Sized>(
    id:      AircraftId,
    model:   &M,
    fleet:   &mut FleetStore,
    runways: &mut RunwayManager,
    rng:     &mut AircraftRng,
    now:     Tick,
) -> LifecycleResult<Admission> {
    let (phase, flow) = {
        let aircraft = fleet.try_get(id)?;
        (aircraft.phase, aircraft.flow())
    };
    let target = admission_phase(flow);
    if phase != Phase::Awaiting {
        return Err(LifecycleError::InvalidTransition { aircraft: id, from: phase, to: target });
    }

    let runway = match fleet.assign_runway(id, runways) {
        Ok(runway) => runway,
        Err(FleetError::Runway(RunwayError::Unavailable(_))) => {
            tracing::debug!(%id, tick = %now, "no runway available; stays queued");
            return Ok(Admission::Blocked);
        }
        Err(err) => return Err(err.into()),
    };

    let speed = model.entry_speed(fleet.try_get(id)?, target, rng);
    let aircraft = aircraft_mut(fleet, id)?;
    aircraft.phase = target;
    aircraft.phase_entered = now;
    aircraft.speed = speed;
    tracing::info!(
        flight = %aircraft.flight_number,
        runway = runway.name(),
        phase = %target,
        tick = %now,
        "admitted"
    );
    Ok(Admission::Granted(runway))
}

/// First phase after admission: arrivals hold, departures taxi.
#[inline]
pub fn admission_phase(flow: Flow) -> Phase {
    match flow {
        Flow::Arrival => Phase::Holding,
        Flow::Departure => Phase::Taxi,
    }
}

fn aircraft_mut(fleet: &mut FleetStore, id: AircraftId) -> LifecycleResult<&mut Aircraft> {
    fleet
        .get_mut(id)
        .ok_or(LifecycleError::Fleet(FleetError::Core(AtcError::AircraftNotFound(id))))
}
