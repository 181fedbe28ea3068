//! Runway allocation policy.
//!
//! Rules, evaluated in order for one request:
//!
//! 1. Arrivals (North/South) try RWY-A.
//! 2. Departures (East/West) try RWY-B.
//! 3. If the preferred runway is held, an `Emergency`-priority aircraft of
//!    either flow tries RWY-C.
//! 4. A `Cargo`-kind aircraft tries RWY-C when nothing directional was granted.
//! 5. Otherwise the request fails with [`RunwayError::Unavailable`].

use atc_core::{AircraftId, AircraftKind, Flow, Priority, RunwayId};

use crate::{RunwayError, RunwayManager, RunwayResult};

/// Everything the policy needs to know about one admission candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunwayRequest {
    pub aircraft: AircraftId,
    pub flow:     Flow,
    pub priority: Priority,
    pub kind:     AircraftKind,
}

impl RunwayRequest {
    /// The directional runway for this request's flow.
    #[inline]
    pub fn preferred_runway(&self) -> RunwayId {
        match self.flow {
            Flow::Arrival => RunwayId::RWY_A,
            Flow::Departure => RunwayId::RWY_B,
        }
    }

    /// Runways to try, in order.  Each one is tried only if the previous
    /// attempt failed.
    pub fn candidates(&self) -> Vec<RunwayId> {
        let mut out = vec![self.preferred_runway()];
        if self.priority == Priority::Emergency || self.kind == AircraftKind::Cargo {
            out.push(RunwayId::RWY_C);
        }
        out
    }
}

impl RunwayManager {
    /// Apply the allocation policy and acquire the first runway it grants.
    pub fn allocate(&mut self, request: &RunwayRequest) -> RunwayResult<RunwayId> {
        for runway in request.candidates() {
            if self.is_free(runway) {
                self.acquire(runway, request.aircraft)?;
                return Ok(runway);
            }
        }
        tracing::debug!(
            aircraft = %request.aircraft,
            priority = %request.priority,
            "no runway granted"
        );
        Err(RunwayError::Unavailable(request.aircraft))
    }
}
