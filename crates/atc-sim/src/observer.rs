//! Simulation observer trait for progress reporting and data collection.

use atc_core::Tick;
use atc_monitor::{Avn, AvnLedger};

use crate::{AircraftSnapshot, FaultEvent};

/// Counts for one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Aircraft that left `Awaiting` with a runway.
    pub admitted:    usize,
    /// Phase entries committed in the apply step.
    pub transitions: usize,
    /// AVNs issued.
    pub violations:  usize,
    /// Aircraft removed by the fault injector.
    pub faults:      usize,
    /// Aircraft in the fleet after the tick.
    pub active:      usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         println!("{tick}: {} admitted, {} active", summary.admitted, summary.active);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per AVN, in id order, as the monitor issues it.
    fn on_violation(&mut self, _avn: &Avn) {}

    /// Called after a fault removal has completed (runway already released).
    fn on_fault(&mut self, _event: &FaultEvent) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with every live aircraft in ascending id order.
    fn on_snapshot(&mut self, _tick: Tick, _aircraft: &[AircraftSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _ledger: &AvnLedger) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
