//! Flight generation from an airline roster.
//!
//! # Usage
//!
//! ```rust
//! use atc_core::{AircraftKind, AirlineKind};
//! use atc_fleet::{Airline, FleetBuilder, Roster};
//!
//! let roster = Roster::new(vec![
//!     Airline::new("PIA", "PIA", AirlineKind::Commercial, 6, 4),
//!     Airline::new("FedEx", "FDX", AirlineKind::Cargo, 3, 2),
//! ]).unwrap();
//!
//! let (fleet, rngs) = FleetBuilder::new(&roster, /*seed=*/ 42)
//!     .schedule_window_ticks(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fleet.len(), 6);
//! assert_eq!(rngs.len(),  6);
//! assert!(fleet.iter().any(|a| a.kind == AircraftKind::Cargo));
//! ```

use atc_core::{AircraftKind, AirlineKind, Direction, SimRng, Tick};

use crate::{AircraftSpec, FleetResult, FleetRngs, FleetStore, Roster};

/// Stream offset separating generation draws from the fault injector's.
const GENERATION_STREAM: u64 = 0x6765_6e65;

/// Fluent builder for the start-up [`FleetStore`] + [`FleetRngs`].
pub struct FleetBuilder<'r> {
    roster: &'r Roster,
    seed:   u64,
    window: u64,
    start:  Tick,
}

impl<'r> FleetBuilder<'r> {
    /// Generate flights for every airline in `roster` using `seed`.
    pub fn new(roster: &'r Roster, seed: u64) -> Self {
        Self {
            roster,
            seed,
            window: 0,
            start: Tick::ZERO,
        }
    }

    /// Scheduled ticks are drawn uniformly from `[start, start + ticks]`.
    pub fn schedule_window_ticks(mut self, ticks: u64) -> Self {
        self.window = ticks;
        self
    }

    /// Tick the generated aircraft enter `Awaiting` at.  Defaults to tick 0.
    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start = tick;
        self
    }

    /// Generate the fleet.
    ///
    /// Aircraft ids follow roster order.  If no Cargo-kind aircraft was
    /// produced, the first generated aircraft is re-kinded as Cargo; its
    /// priority is left as generated.
    pub fn build(self) -> FleetResult<(FleetStore, FleetRngs)> {
        let mut rng = SimRng::new(self.seed).child(GENERATION_STREAM);
        let mut store = FleetStore::new();
        let mut rngs = FleetRngs::new(self.seed);

        for airline in self.roster.airlines() {
            for n in 1..=airline.flight_count {
                let direction = random_direction(airline.kind, &mut rng);
                let scheduled = self.start.offset(rng.gen_range(0..=self.window));
                let spec = AircraftSpec {
                    flight_number: format!("{}{n}", airline.code),
                    airline:       airline.code.clone(),
                    category:      airline.kind,
                    direction,
                    priority:      airline.kind.default_priority(),
                    scheduled,
                };
                let id = store.insert(spec, self.start)?;
                rngs.ensure(id);
            }
        }

        let has_cargo = store.iter().any(|a| a.kind == AircraftKind::Cargo);
        if !has_cargo {
            if let Some(first) = store.iter_mut().next() {
                tracing::debug!(flight = %first.flight_number, "no cargo generated; re-kinding first aircraft");
                first.kind = AircraftKind::Cargo;
            }
        }

        tracing::debug!(aircraft = store.len(), "fleet generated");
        Ok((store, rngs))
    }
}

/// Commercial airlines fly arrivals (North/South); everyone else departures.
fn random_direction(kind: AirlineKind, rng: &mut SimRng) -> Direction {
    let choices = match kind {
        AirlineKind::Commercial => [Direction::North, Direction::South],
        _ => [Direction::East, Direction::West],
    };
    if rng.gen_bool(0.5) { choices[0] } else { choices[1] }
}
