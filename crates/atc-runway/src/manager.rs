//! `RunwayManager`: the authoritative occupancy table.

use atc_core::{AircraftId, RunwayId};

use crate::{Alignment, Runway, RunwayError, RunwayResult};

/// Owns the airport's three runways and enforces at-most-one-holder.
///
/// The manager is owned by the simulation and only mutated during the
/// sequential apply phase, so every acquire/release is serialized through a
/// single `&mut` borrow.  No per-runway locks exist, so none can be leaked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunwayManager {
    runways: [Runway; 3],
}

impl Default for RunwayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RunwayManager {
    /// RWY-A (North-South), RWY-B (East-West), RWY-C (Flexible), all free.
    pub fn new() -> Self {
        Self {
            runways: [
                Runway::new(RunwayId::RWY_A, Alignment::NorthSouth),
                Runway::new(RunwayId::RWY_B, Alignment::EastWest),
                Runway::new(RunwayId::RWY_C, Alignment::Flexible),
            ],
        }
    }

    /// Look up a runway by id.
    pub fn get(&self, runway: RunwayId) -> RunwayResult<&Runway> {
        self.runways
            .get(runway.index())
            .ok_or(RunwayError::UnknownRunway(runway))
    }

    /// Iterator over all runways in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Runway> {
        self.runways.iter()
    }

    /// `true` if `runway` exists and has no holder.
    #[inline]
    pub fn is_free(&self, runway: RunwayId) -> bool {
        self.get(runway).is_ok_and(|r| !r.is_occupied())
    }

    /// The aircraft holding `runway`, if any.
    pub fn holder(&self, runway: RunwayId) -> Option<AircraftId> {
        self.get(runway).ok().and_then(Runway::holder)
    }

    /// The runway held by `aircraft`, if any.
    pub fn held_by(&self, aircraft: AircraftId) -> Option<RunwayId> {
        self.runways
            .iter()
            .find(|r| r.holder == Some(aircraft))
            .map(|r| r.id)
    }

    /// Number of runways without a holder.
    pub fn free_count(&self) -> usize {
        self.runways.iter().filter(|r| !r.is_occupied()).count()
    }

    /// Grant `runway` to `aircraft`.
    ///
    /// Fails if the runway is held (by anyone, including `aircraft`) or if
    /// `aircraft` already holds a different runway.
    pub fn acquire(&mut self, runway: RunwayId, aircraft: AircraftId) -> RunwayResult<()> {
        if let Some(current) = self.held_by(aircraft) {
            return Err(RunwayError::AlreadyHolding { aircraft, runway: current });
        }
        let slot = self
            .runways
            .get_mut(runway.index())
            .ok_or(RunwayError::UnknownRunway(runway))?;
        if let Some(holder) = slot.holder {
            return Err(RunwayError::Occupied { runway, holder });
        }
        slot.holder = Some(aircraft);
        tracing::debug!(runway = slot.name, %aircraft, "runway acquired");
        Ok(())
    }

    /// Return `runway` to the free pool.
    ///
    /// Only the current holder may release.  A rejected release leaves the
    /// table untouched.
    pub fn release(&mut self, runway: RunwayId, caller: AircraftId) -> RunwayResult<()> {
        let slot = self
            .runways
            .get_mut(runway.index())
            .ok_or(RunwayError::UnknownRunway(runway))?;
        match slot.holder {
            None => Err(RunwayError::NotHeld(runway)),
            Some(holder) if holder != caller => {
                Err(RunwayError::InvalidRelease { runway, caller, holder })
            }
            Some(_) => {
                slot.holder = None;
                tracing::debug!(runway = slot.name, aircraft = %caller, "runway released");
                Ok(())
            }
        }
    }
}
