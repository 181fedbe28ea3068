//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `aircraft_snapshots.csv`
//! - `tick_summaries.csv`
//! - `violations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AircraftSnapshotRow, OutputResult, TickSummaryRow, ViolationRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    violations: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("aircraft_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "aircraft_id", "flight_number", "airline", "kind", "phase",
            "speed", "direction", "priority", "runway", "violation_flag",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "unix_time_secs", "admitted", "transitions", "violations", "faults", "active",
        ])?;

        let mut violations = Writer::from_path(dir.join("violations.csv"))?;
        violations.write_record([
            "avn_id", "tick", "unix_time_secs", "aircraft_id", "flight_number", "phase", "speed", "active",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            violations,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AircraftSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.aircraft_id.to_string(),
                row.flight_number.clone(),
                row.airline.clone(),
                row.kind.to_owned(),
                row.phase.to_owned(),
                format!("{:.1}", row.speed),
                row.direction.to_owned(),
                row.priority.to_owned(),
                row.runway.to_owned(),
                (row.violation_flag as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.admitted.to_string(),
            row.transitions.to_string(),
            row.violations.to_string(),
            row.faults.to_string(),
            row.active.to_string(),
        ])?;
        Ok(())
    }

    fn write_violations(&mut self, rows: &[ViolationRow]) -> OutputResult<()> {
        for row in rows {
            self.violations.write_record(&[
                row.avn_id.to_string(),
                row.tick.to_string(),
                row.unix_time_secs.to_string(),
                row.aircraft_id.to_string(),
                row.flight_number.clone(),
                row.phase.to_owned(),
                format!("{:.1}", row.speed),
                (row.active as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.violations.flush()?;
        Ok(())
    }
}
