//! `atc-sim`: tick loop orchestrator for the atc airport scheduler.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Queues     AdmissionQueues::build from the tick-start fleet.
//!   ② Intents    PhaseModel::advance for every admitted aircraft
//!                 (parallel with the `parallel` feature).
//!   ③ Apply      ascending AircraftId: speeds, flags, runway releases,
//!                 phase entries checked against the lifecycle graph.
//!   ④ Admit      heads of both queues by merged (priority, scheduled)
//!                 key; a head without a runway stops its own queue.
//!   ⑤ Monitor    ViolationMonitor::scan issues AVNs.
//!   ⑥ Faults     FaultInjector may remove one ground-phase aircraft,
//!                 releasing its runway first.
//! ```
//!
//! Releases in ③ come before admissions in ④, so a runway freed this tick
//! can be granted this tick.  The `RunwayManager` is owned by [`Sim`] and
//! only touched in ③, ④, and ⑥, all sequential.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent step on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atc_core::SimConfig;
//! use atc_fleet::load_roster_csv;
//! use atc_lifecycle::StandardPhaseModel;
//! use atc_sim::{NoopObserver, SimBuilder};
//!
//! let roster = load_roster_csv("roster.csv".as_ref())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), roster, StandardPhaseModel::new())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod fault;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use fault::{FaultEvent, FaultInjector};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
pub use snapshot::AircraftSnapshot;
