//! Airspace Violation Notices and the append-only ledger that issues them.

use atc_core::{AircraftId, AvnId, Phase, Tick};

use crate::{MonitorError, MonitorResult};

/// One recorded speed-envelope breach.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Avn {
    pub id:               AvnId,
    pub aircraft:         AircraftId,
    pub flight_number:    String,
    /// Phase and speed at the moment of the breach.
    pub phase:            Phase,
    pub speed:            f32,
    pub issued_at:        Tick,
    pub issued_unix_secs: i64,
    pub active:           bool,
}

/// Every AVN issued during a run, in ascending id order.
///
/// The ledger owns the id counter; ids start at 1 and are never reused.
#[derive(Clone, Debug)]
pub struct AvnLedger {
    records: Vec<Avn>,
    next_id: u64,
}

impl Default for AvnLedger {
    fn default() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }
}

impl AvnLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active AVN and return its id.
    pub fn issue(
        &mut self,
        aircraft:         AircraftId,
        flight_number:    &str,
        phase:            Phase,
        speed:            f32,
        issued_at:        Tick,
        issued_unix_secs: i64,
    ) -> AvnId {
        let id = AvnId(self.next_id);
        self.next_id += 1;
        self.records.push(Avn {
            id,
            aircraft,
            flight_number: flight_number.to_owned(),
            phase,
            speed,
            issued_at,
            issued_unix_secs,
            active: true,
        });
        id
    }

    /// Mark `id` inactive.  Records are never removed.
    pub fn deactivate(&mut self, id: AvnId) -> MonitorResult<()> {
        let avn = self
            .records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(MonitorError::UnknownAvn(id))?;
        if !avn.active {
            return Err(MonitorError::AlreadyInactive(id));
        }
        avn.active = false;
        Ok(())
    }

    pub fn get(&self, id: AvnId) -> Option<&Avn> {
        // Ids are dense and start at 1, so the slot is id - 1.
        let slot = usize::try_from(id.0.checked_sub(1)?).ok()?;
        self.records.get(slot).filter(|a| a.id == id)
    }

    /// All AVNs, ascending id.
    pub fn iter(&self) -> impl Iterator<Item = &Avn> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Avn] {
        &self.records
    }

    pub fn active(&self) -> impl Iterator<Item = &Avn> {
        self.records.iter().filter(|a| a.active)
    }

    pub fn for_aircraft(&self, aircraft: AircraftId) -> impl Iterator<Item = &Avn> {
        self.records.iter().filter(move |a| a.aircraft == aircraft)
    }

    /// AVNs issued at or after `since`.
    pub fn issued_since(&self, since: Tick) -> &[Avn] {
        let start = self.records.partition_point(|a| a.issued_at < since);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
