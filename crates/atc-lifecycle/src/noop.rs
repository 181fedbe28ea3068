//! A no-op phase model: aircraft never leave the phase they were admitted to.

use atc_core::{AircraftId, AircraftRng};

use crate::{Intent, PhaseModel, TickContext};

/// A [`PhaseModel`] that always returns an empty intent list.
///
/// Useful in tests that exercise admission and runway contention without
/// aircraft moving on.
pub struct NoopPhaseModel;

impl PhaseModel for NoopPhaseModel {
    fn advance(
        &self,
        _aircraft: AircraftId,
        _ctx:      &TickContext<'_>,
        _rng:      &mut AircraftRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
