//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use atc_core::{SimClock, SimConfig, Tick};
use atc_monitor::AvnLedger;
use atc_sim::{AircraftSnapshot, SimObserver, TickSummary};

use crate::row::{AircraftSnapshotRow, TickSummaryRow, ViolationRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes snapshots, tick summaries, and the final
/// AVN ledger to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// Violations are written once at the end of the run so each row carries
/// the AVN's final `active` flag.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           tick.0,
            unix_time_secs: self.clock.unix_secs_at(tick),
            admitted:       summary.admitted as u64,
            transitions:    summary.transitions as u64,
            violations:     summary.violations as u64,
            faults:         summary.faults as u64,
            active:         summary.active as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, aircraft: &[AircraftSnapshot]) {
        if aircraft.is_empty() {
            return;
        }
        let rows: Vec<AircraftSnapshotRow> = aircraft
            .iter()
            .map(|s| AircraftSnapshotRow::new(tick.0, s))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, ledger: &AvnLedger) {
        let rows: Vec<ViolationRow> = ledger.iter().map(ViolationRow::from).collect();
        let result = self.writer.write_violations(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
