//! The violation monitor.

use atc_core::{AvnId, SimClock};
use atc_fleet::FleetStore;

use crate::AvnLedger;

/// Scans the post-transition fleet and issues AVNs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViolationMonitor;

impl ViolationMonitor {
    pub fn new() -> Self {
        Self
    }

    /// Issue at most one AVN per breaching aircraft for the clock's current
    /// tick, clearing each aircraft's violation flag.
    ///
    /// Returns the ids issued, ascending.
    pub fn scan(&self, fleet: &mut FleetStore, ledger: &mut AvnLedger, clock: &SimClock) -> Vec<AvnId> {
        let now = clock.current_tick;
        let unix_secs = clock.current_unix_secs();
        let mut issued = Vec::new();

        for aircraft in fleet.iter_mut() {
            let out_of_band = aircraft
                .phase
                .envelope()
                .is_some_and(|env| env.is_violated(aircraft.speed));
            if !out_of_band && !aircraft.violation_flag {
                continue;
            }
            let id = ledger.issue(
                aircraft.id,
                &aircraft.flight_number,
                aircraft.phase,
                aircraft.speed,
                now,
                unix_secs,
            );
            aircraft.violation_flag = false;
            tracing::info!(
                avn = %id,
                flight = %aircraft.flight_number,
                phase = %aircraft.phase,
                speed = aircraft.speed,
                tick = %now,
                "AVN issued"
            );
            issued.push(id);
        }
        issued
    }
}
