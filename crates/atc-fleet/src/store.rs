//! `FleetStore` (aircraft table) and `FleetRngs` (per-aircraft RNG).
//!
//! # Why two structs?
//!
//! The parallel intent phase needs `&FleetStore` (shared read access to every
//! aircraft) and `&mut AircraftRng` for each aircraft at the same time.
//! Keeping RNGs in a separate `FleetRngs` lets the tick loop borrow both
//! without fighting the borrow checker:
//!
//! ```ignore
//! let fleet: &FleetStore = &sim.fleet;
//! let intents: Vec<_> = sim.rngs
//!     .iter_mut()
//!     .map(|(id, rng)| model.advance(fleet.get(id)?, &ctx, rng))
//!     .collect();
//! ```

use std::collections::BTreeMap;

use atc_core::{AircraftId, AircraftRng, AtcError, RunwayId, Tick};
use atc_runway::RunwayManager;

use crate::{Aircraft, AircraftSpec, FleetError, FleetResult};

#[cfg(feature = "fx-hash")]
type FlightIndex = rustc_hash::FxHashMap<String, AircraftId>;
#[cfg(not(feature = "fx-hash"))]
type FlightIndex = std::collections::HashMap<String, AircraftId>;

// ── FleetRngs ─────────────────────────────────────────────────────────────────

/// Per-aircraft deterministic RNG state, separated from [`FleetStore`] to
/// enable simultaneous `&FleetStore` + `&mut AircraftRng` borrows.
pub struct FleetRngs {
    seed:  u64,
    inner: BTreeMap<AircraftId, AircraftRng>,
}

impl FleetRngs {
    pub fn new(global_seed: u64) -> Self {
        Self { seed: global_seed, inner: BTreeMap::new() }
    }

    /// Seed an RNG for `aircraft` if it does not have one yet.
    pub fn ensure(&mut self, aircraft: AircraftId) {
        let seed = self.seed;
        self.inner
            .entry(aircraft)
            .or_insert_with(|| AircraftRng::new(seed, aircraft));
    }

    /// Mutable reference to one aircraft's RNG.
    #[inline]
    pub fn get_mut(&mut self, aircraft: AircraftId) -> Option<&mut AircraftRng> {
        self.inner.get_mut(&aircraft)
    }

    /// Drop the RNG of a removed aircraft.
    pub fn remove(&mut self, aircraft: AircraftId) {
        self.inner.remove(&aircraft);
    }

    /// All RNGs in ascending id order.  The references are disjoint, so the
    /// collected `Vec` can be handed to a parallel iterator.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AircraftId, &mut AircraftRng)> {
        self.inner.iter_mut().map(|(&id, rng)| (id, rng))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Every live aircraft, keyed and iterated by ascending [`AircraftId`].
#[derive(Default)]
pub struct FleetStore {
    aircraft:  BTreeMap<AircraftId, Aircraft>,
    by_flight: FlightIndex,
    next_id:   u32,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn contains(&self, id: AircraftId) -> bool {
        self.aircraft.contains_key(&id)
    }

    pub fn get(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(&id)
    }

    pub fn get_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(&id)
    }

    /// Like [`get`](Self::get) but with a typed error.
    pub fn try_get(&self, id: AircraftId) -> FleetResult<&Aircraft> {
        self.aircraft
            .get(&id)
            .ok_or(FleetError::Core(AtcError::AircraftNotFound(id)))
    }

    /// Aircraft in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Aircraft> {
        self.aircraft.values_mut()
    }

    pub fn ids(&self) -> Vec<AircraftId> {
        self.aircraft.keys().copied().collect()
    }

    /// Id of the live aircraft flying `flight_number`.
    pub fn find_by_flight(&self, flight_number: &str) -> Option<AircraftId> {
        self.by_flight.get(flight_number).copied()
    }

    /// Live aircraft operated by the airline with roster code `airline`.
    pub fn count_for_airline(&self, airline: &str) -> usize {
        self.aircraft.values().filter(|a| a.airline == airline).count()
    }

    /// Add a new aircraft in `Awaiting` with phase entry at `now`.
    ///
    /// Flight numbers must be unique among live aircraft.
    pub fn insert(&mut self, spec: AircraftSpec, now: Tick) -> FleetResult<AircraftId> {
        if self.by_flight.contains_key(&spec.flight_number) {
            return Err(FleetError::DuplicateFlight(spec.flight_number));
        }
        let id = AircraftId(self.next_id);
        self.next_id += 1;
        self.by_flight.insert(spec.flight_number.clone(), id);
        self.aircraft.insert(id, Aircraft::new(id, spec, now));
        Ok(id)
    }

    // ── Runway bookkeeping ────────────────────────────────────────────────

    /// Run the allocation policy for `id` and record the granted runway.
    pub fn assign_runway(
        &mut self,
        id:      AircraftId,
        runways: &mut RunwayManager,
    ) -> FleetResult<RunwayId> {
        let aircraft = self
            .aircraft
            .get_mut(&id)
            .ok_or(FleetError::Core(AtcError::AircraftNotFound(id)))?;
        let runway = runways.allocate(&aircraft.runway_request())?;
        aircraft.runway = Some(runway);
        Ok(runway)
    }

    /// Release whatever runway the manager lists `id` as holding.
    ///
    /// Returns the released runway, or `None` if nothing was held.
    pub fn release_runway(
        &mut self,
        id:      AircraftId,
        runways: &mut RunwayManager,
    ) -> FleetResult<Option<RunwayId>> {
        let aircraft = self
            .aircraft
            .get_mut(&id)
            .ok_or(FleetError::Core(AtcError::AircraftNotFound(id)))?;
        let held = runways.held_by(id);
        if aircraft.runway != held {
            tracing::warn!(
                flight = %aircraft.flight_number,
                recorded = ?aircraft.runway,
                table = ?held,
                "runway record out of step with manager; trusting manager"
            );
        }
        aircraft.runway = None;
        match held {
            Some(runway) => {
                runways.release(runway, id)?;
                Ok(Some(runway))
            }
            None => Ok(None),
        }
    }

    /// Remove `id` from the table, releasing its runway first.
    ///
    /// The release step is unconditional, so a removed aircraft can never
    /// leave a runway held.
    pub fn remove(&mut self, id: AircraftId, runways: &mut RunwayManager) -> FleetResult<Aircraft> {
        self.release_runway(id, runways)?;
        let orphan = runways.held_by(id);
        debug_assert!(orphan.is_none(), "{id} still holds a runway after release");
        if let Some(runway) = orphan {
            return Err(FleetError::OrphanedResource { aircraft: id, runway });
        }
        let aircraft = self
            .aircraft
            .remove(&id)
            .ok_or(FleetError::Core(AtcError::AircraftNotFound(id)))?;
        self.by_flight.remove(&aircraft.flight_number);
        Ok(aircraft)
    }

    /// `true` if every aircraft's runway record matches the manager's table
    /// and no runway is held by an aircraft outside the fleet.
    pub fn runways_consistent(&self, runways: &RunwayManager) -> bool {
        let records_match = self
            .aircraft
            .values()
            .all(|a| a.runway == runways.held_by(a.id));
        let no_orphans = runways
            .iter()
            .filter_map(|r| r.holder())
            .all(|holder| self.aircraft.contains_key(&holder));
        records_match && no_orphans
    }
}
