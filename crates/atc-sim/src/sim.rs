//! The `Sim` struct and its tick loop.

use atc_core::{AircraftId, AvnId, Phase, SimClock, SimConfig, SimRng, Tick};
use atc_fleet::{FleetRngs, FleetStore, FlightRequest, Roster};
use atc_lifecycle::{Admission, Intent, PhaseModel, TickContext, admit, apply_intents};
use atc_monitor::{AvnLedger, ViolationMonitor};
use atc_runway::RunwayManager;
use atc_schedule::AdmissionQueues;

use crate::{AircraftSnapshot, FaultInjector, SimError, SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// `Sim<M>` owns every piece of mutable state: the aircraft table, the
/// runway occupancy table, the AVN ledger with its id counter, and the
/// simulation-level RNG.  Nothing is global.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: PhaseModel> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// The phase model.  Called once per admitted aircraft per tick.
    pub model: M,

    pub monitor: ViolationMonitor,

    pub faults: FaultInjector,

    pub(crate) fleet:   FleetStore,
    pub(crate) rngs:    FleetRngs,
    pub(crate) runways: RunwayManager,
    pub(crate) ledger:  AvnLedger,
    pub(crate) roster:  Roster,
    pub(crate) rng:     SimRng,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<M: PhaseModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        tracing::info!(
            aircraft = self.fleet.len(),
            ticks = self.config.total_ticks,
            seed = self.config.seed,
            "simulation start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        tracing::info!(
            tick = %self.clock.current_tick,
            avns = self.ledger.len(),
            active = self.fleet.len(),
            "simulation end"
        );
        observer.on_sim_end(self.clock.current_tick, &self.ledger);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Inject a flight validated against the roster.  It enters `Awaiting`
    /// and joins the queues once its scheduled tick arrives.
    pub fn add_flight(&mut self, request: FlightRequest) -> SimResult<AircraftId> {
        let id = self.fleet.add_flight(request, &self.roster, self.clock.current_tick)?;
        self.rngs.ensure(id);
        Ok(id)
    }

    /// Every live aircraft, ascending id.
    pub fn snapshot(&self) -> Vec<AircraftSnapshot> {
        self.fleet.iter().map(AircraftSnapshot::from).collect()
    }

    /// Every AVN issued so far, ascending id.
    pub fn ledger(&self) -> &AvnLedger {
        &self.ledger
    }

    /// Revoke an AVN.  The record stays in the ledger, marked inactive.
    pub fn deactivate_avn(&mut self, id: AvnId) -> SimResult<()> {
        Ok(self.ledger.deactivate(id)?)
    }

    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn runways(&self) -> &RunwayManager {
        &self.runways
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &summary);
        if self.config.output_interval_ticks > 0
            && now.0 % self.config.output_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.snapshot());
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        let mut summary = TickSummary::default();

        // ── ① Admission order from the tick-start fleet ───────────────────
        let queues = AdmissionQueues::build(&self.fleet, now);

        // ── ② Intent step (produce) ───────────────────────────────────────
        let intents = self.compute_intents(now);

        // ── ③ Apply step (consume) ────────────────────────────────────────
        //
        // Intents arrive in ascending AircraftId order (BTreeMap iteration),
        // so results match regardless of how the intent step was scheduled.
        for (id, aircraft_intents) in intents {
            let applied = apply_intents(id, &aircraft_intents, &mut self.fleet, &mut self.runways, now)?;
            if applied.transition.is_some() {
                summary.transitions += 1;
            }
        }

        // ── ④ Admissions, merged queue order ──────────────────────────────
        //
        // Both queues can overflow onto RWY-C, so heads are served by the
        // merged (priority, scheduled) key rather than queue by queue.
        let mut order = queues.service_order();
        while let Some((flow, entry)) = order.next_head() {
            match self.admit_one(entry.aircraft, now)? {
                Admission::Granted(_) => summary.admitted += 1,
                Admission::Blocked => {
                    order.stop(flow);
                    tracing::debug!(
                        ?flow,
                        head = %entry.aircraft,
                        waiting = order.remaining(flow) + 1,
                        "queue head blocked"
                    );
                }
            }
        }

        // ── ⑤ Violation monitor ───────────────────────────────────────────
        let issued = self.monitor.scan(&mut self.fleet, &mut self.ledger, &self.clock);
        summary.violations = issued.len();
        for avn in issued.iter().filter_map(|&id| self.ledger.get(id)) {
            observer.on_violation(avn);
        }

        // ── ⑥ Fault injection ─────────────────────────────────────────────
        if let Some(event) = self.faults.inject(
            &mut self.fleet,
            &mut self.rngs,
            &mut self.runways,
            &mut self.rng,
            now,
        )? {
            summary.faults = 1;
            observer.on_fault(&event);
        }

        debug_assert!(self.fleet.runways_consistent(&self.runways));
        summary.active = self.fleet.len();
        Ok(summary)
    }

    fn admit_one(&mut self, id: AircraftId, now: Tick) -> SimResult<Admission> {
        self.rngs.ensure(id);
        let rng = self
            .rngs
            .get_mut(id)
            .ok_or_else(|| SimError::Config(format!("{id} has no RNG stream")))?;
        Ok(admit(id, &self.model, &mut self.fleet, &mut self.runways, rng, now)?)
    }

    /// Compute intents for every aircraft that has left `Awaiting`.
    ///
    /// With the `parallel` Cargo feature, `advance` runs on Rayon's thread
    /// pool (or the dedicated pool when `config.num_threads` is set).
    fn compute_intents(&mut self, now: Tick) -> Vec<(AircraftId, Vec<Intent>)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let fleet   = &self.fleet;
        let model   = &self.model;
        let timings = &self.config.timings;
        let rngs    = &mut self.rngs;

        let ctx = TickContext::new(now, fleet, timings);
        let active = rngs
            .iter_mut()
            .filter(|(id, _)| fleet.get(*id).is_some_and(|a| a.phase != Phase::Awaiting));

        #[cfg(not(feature = "parallel"))]
        {
            active.map(|(id, rng)| (id, model.advance(id, &ctx, rng))).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // BTreeMap::iter_mut hands out disjoint &mut refs, one per id.
            let work: Vec<_> = active.collect();
            let run = || -> Vec<(AircraftId, Vec<Intent>)> {
                work.into_par_iter()
                    .map(|(id, rng)| (id, model.advance(id, &ctx, rng)))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }
    }
}
