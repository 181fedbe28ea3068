//! Aircraft intents: the state changes a phase model can request.

use atc_core::Phase;

/// A change an aircraft wants committed during the current tick's apply step.
///
/// Produced by [`PhaseModel::advance`][crate::PhaseModel::advance] and
/// consumed in order by [`apply_intents`][crate::apply_intents].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// New speed in km/h.  Negative values are clamped to zero.
    SetSpeed(f32),

    /// Mark a speed breach for the violation monitor to pick up.
    FlagViolation,

    /// Give back the runway this aircraft holds, if any.
    ReleaseRunway,

    /// Move to `Phase`.  Rejected unless it is the next phase for the
    /// aircraft's flow.
    EnterPhase(Phase),
}
