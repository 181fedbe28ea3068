//! Fluent builder for constructing a [`Sim`].

use atc_core::{SimConfig, SimRng};
use atc_fleet::{FleetBuilder, FleetRngs, FleetStore, Roster};
use atc_lifecycle::PhaseModel;
use atc_monitor::{AvnLedger, ViolationMonitor};
use atc_runway::RunwayManager;

use crate::{FaultInjector, Sim, SimError, SimResult};

/// Stream offset for the fault injector's draws.
const FAULT_STREAM: u64 = 0x6661_756c;

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration, timings, …
/// - [`Roster`]: the airlines; used for generation and `add_flight`
/// - `M: PhaseModel`: the lifecycle implementation
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.fleet(store, rngs)`  | Generated from the roster with `FleetBuilder`     |
/// | `.fault_injector(f)`   | `FaultInjector::new(config.fault_probability)`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, roster, StandardPhaseModel::new())
///     .fault_injector(FaultInjector::disabled())
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: PhaseModel> {
    config: SimConfig,
    roster: Roster,
    model:  M,
    fleet:  Option<(FleetStore, FleetRngs)>,
    faults: Option<FaultInjector>,
}

impl<M: PhaseModel> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, roster: Roster, model: M) -> Self {
        Self { config, roster, model, fleet: None, faults: None }
    }

    /// Use a pre-built fleet instead of generating one from the roster.
    ///
    /// Every aircraft must start in `Awaiting` without a runway.
    pub fn fleet(mut self, store: FleetStore, rngs: FleetRngs) -> Self {
        self.fleet = Some((store, rngs));
        self
    }

    /// Override the fault injector configured by `config.fault_probability`.
    pub fn fault_injector(mut self, faults: FaultInjector) -> Self {
        self.faults = Some(faults);
        self
    }

    /// Validate inputs, generate the fleet if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        let clock = self.config.make_clock();

        // ── Resolve the fleet ─────────────────────────────────────────────
        let (fleet, mut rngs) = match self.fleet {
            Some(pair) => pair,
            None => FleetBuilder::new(&self.roster, self.config.seed)
                .schedule_window_ticks(clock.ticks_for_secs(self.config.schedule_window_secs))
                .start_tick(clock.current_tick)
                .build()?,
        };
        if let Some(held) = fleet.iter().find(|a| a.runway().is_some()) {
            return Err(SimError::Config(format!(
                "{} starts out holding a runway",
                held.flight_number
            )));
        }
        for id in fleet.ids() {
            rngs.ensure(id);
        }

        let faults = self
            .faults
            .unwrap_or_else(|| FaultInjector::new(self.config.fault_probability));

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Sim {
            clock,
            rng: SimRng::new(self.config.seed).child(FAULT_STREAM),
            config: self.config,
            model: self.model,
            monitor: ViolationMonitor::new(),
            faults,
            fleet,
            rngs,
            runways: RunwayManager::new(),
            ledger: AvnLedger::new(),
            roster: self.roster,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
