//! Deterministic per-aircraft and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each aircraft gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (aircraft_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  Speed
//! sampling therefore never depends on which thread advanced which aircraft,
//! and injecting a new flight does not disturb the streams of existing ones.
//!
//! There is no process-wide generator: the simulation owns one [`SimRng`] for
//! global draws (fault injection, flight generation) and one [`AircraftRng`]
//! per aircraft.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AircraftId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// `p` clamped to `[0, 1]`, with NaN mapped to 0 so `gen_bool` cannot panic.
#[inline]
fn unit_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

// ── AircraftRng ───────────────────────────────────────────────────────────────

/// Per-aircraft deterministic RNG.
///
/// Stored in `atc_fleet::FleetRngs` alongside (not inside) the aircraft table
/// so the intent phase can hold `&FleetStore` and `&mut AircraftRng` at once.
pub struct AircraftRng(SmallRng);

impl AircraftRng {
    /// Seed deterministically from the run's global seed and an aircraft id.
    pub fn new(global_seed: u64, aircraft: AircraftId) -> Self {
        let seed = global_seed ^ (aircraft.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AircraftRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(unit_probability(p))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (flight generation, fault
/// injection).
///
/// Used only in the sequential parts of the tick.  If you need parallel
/// randomness, derive a child per worker with [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(unit_probability(p))
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
