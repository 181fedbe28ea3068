//! The `OutputWriter` trait implemented by backend writers.

use crate::{AircraftSnapshotRow, OutputResult, TickSummaryRow, ViolationRow};

/// Sink for the three output tables.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of aircraft snapshot rows.
    fn write_snapshots(&mut self, rows: &[AircraftSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write AVN rows, ascending id.
    fn write_violations(&mut self, rows: &[ViolationRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
