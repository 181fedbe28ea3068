//! Unit tests for atc-runway.

use atc_core::{AircraftId, AircraftKind, Flow, Priority, RunwayId};

use crate::{RunwayError, RunwayManager, RunwayRequest};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn request(id: u32, flow: Flow, priority: Priority, kind: AircraftKind) -> RunwayRequest {
    RunwayRequest { aircraft: AircraftId(id), flow, priority, kind }
}

fn commercial(id: u32, flow: Flow) -> RunwayRequest {
    request(id, flow, Priority::Commercial, AircraftKind::Commercial)
}

// ── acquire / release ─────────────────────────────────────────────────────────

#[cfg(test)]
mod manager_tests {
    use super::*;

    #[test]
    fn starts_all_free() {
        let m = RunwayManager::new();
        assert_eq!(m.free_count(), 3);
        for r in RunwayId::ALL {
            assert!(m.is_free(r));
            assert_eq!(m.holder(r), None);
        }
    }

    #[test]
    fn acquire_sets_holder() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_A, AircraftId(1)).unwrap();
        assert_eq!(m.holder(RunwayId::RWY_A), Some(AircraftId(1)));
        assert_eq!(m.held_by(AircraftId(1)), Some(RunwayId::RWY_A));
        assert!(m.get(RunwayId::RWY_A).unwrap().is_occupied());
    }

    #[test]
    fn second_acquire_fails() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_B, AircraftId(1)).unwrap();
        let err = m.acquire(RunwayId::RWY_B, AircraftId(2)).unwrap_err();
        assert_eq!(err, RunwayError::Occupied { runway: RunwayId::RWY_B, holder: AircraftId(1) });
        assert_eq!(m.holder(RunwayId::RWY_B), Some(AircraftId(1)));
    }

    #[test]
    fn aircraft_holds_at_most_one_runway() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_A, AircraftId(1)).unwrap();
        let err = m.acquire(RunwayId::RWY_C, AircraftId(1)).unwrap_err();
        assert!(matches!(err, RunwayError::AlreadyHolding { .. }));
        assert!(m.is_free(RunwayId::RWY_C));
    }

    #[test]
    fn release_free_runway_fails() {
        let mut m = RunwayManager::new();
        assert_eq!(
            m.release(RunwayId::RWY_A, AircraftId(1)),
            Err(RunwayError::NotHeld(RunwayId::RWY_A))
        );
    }

    #[test]
    fn release_by_non_holder_rejected_without_change() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_A, AircraftId(1)).unwrap();
        let before = m.clone();
        let err = m.release(RunwayId::RWY_A, AircraftId(2)).unwrap_err();
        assert!(matches!(err, RunwayError::InvalidRelease { .. }));
        assert_eq!(m, before);
    }

    #[test]
    fn acquire_release_roundtrip_is_pristine() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_C, AircraftId(4)).unwrap();
        m.release(RunwayId::RWY_C, AircraftId(4)).unwrap();
        assert_eq!(m, RunwayManager::new());
    }

    #[test]
    fn unknown_runway() {
        let mut m = RunwayManager::new();
        assert_eq!(
            m.acquire(RunwayId(7), AircraftId(0)),
            Err(RunwayError::UnknownRunway(RunwayId(7)))
        );
        assert!(!m.is_free(RunwayId(7)));
    }
}

// ── Allocation policy ─────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn arrival_prefers_rwy_a() {
        let mut m = RunwayManager::new();
        assert_eq!(m.allocate(&commercial(1, Flow::Arrival)), Ok(RunwayId::RWY_A));
    }

    #[test]
    fn departure_prefers_rwy_b() {
        let mut m = RunwayManager::new();
        assert_eq!(m.allocate(&commercial(1, Flow::Departure)), Ok(RunwayId::RWY_B));
    }

    #[test]
    fn commercial_blocked_when_preferred_held() {
        let mut m = RunwayManager::new();
        m.allocate(&commercial(1, Flow::Arrival)).unwrap();
        assert_eq!(
            m.allocate(&commercial(2, Flow::Arrival)),
            Err(RunwayError::Unavailable(AircraftId(2)))
        );
        // Flexible runway stays free for emergency/cargo traffic.
        assert!(m.is_free(RunwayId::RWY_C));
    }

    #[test]
    fn emergency_overflows_to_rwy_c() {
        let mut m = RunwayManager::new();
        m.allocate(&commercial(1, Flow::Departure)).unwrap();
        let emergency = request(2, Flow::Departure, Priority::Emergency, AircraftKind::Emergency);
        assert_eq!(m.allocate(&emergency), Ok(RunwayId::RWY_C));
    }

    #[test]
    fn emergency_takes_preferred_when_free() {
        let mut m = RunwayManager::new();
        let emergency = request(2, Flow::Arrival, Priority::Emergency, AircraftKind::Emergency);
        assert_eq!(m.allocate(&emergency), Ok(RunwayId::RWY_A));
    }

    #[test]
    fn cargo_uses_rwy_c_when_directional_held() {
        let mut m = RunwayManager::new();
        m.allocate(&commercial(1, Flow::Arrival)).unwrap();
        let cargo = request(2, Flow::Arrival, Priority::Cargo, AircraftKind::Cargo);
        assert_eq!(m.allocate(&cargo), Ok(RunwayId::RWY_C));
    }

    #[test]
    fn vip_does_not_overflow() {
        let mut m = RunwayManager::new();
        m.allocate(&commercial(1, Flow::Arrival)).unwrap();
        let vip = request(2, Flow::Arrival, Priority::Vip, AircraftKind::Commercial);
        assert_eq!(m.allocate(&vip), Err(RunwayError::Unavailable(AircraftId(2))));
    }

    #[test]
    fn all_held_fails() {
        let mut m = RunwayManager::new();
        m.acquire(RunwayId::RWY_A, AircraftId(1)).unwrap();
        m.acquire(RunwayId::RWY_C, AircraftId(3)).unwrap();
        let emergency = request(4, Flow::Arrival, Priority::Emergency, AircraftKind::Emergency);
        assert_eq!(m.allocate(&emergency), Err(RunwayError::Unavailable(AircraftId(4))));
        assert_eq!(m.holder(RunwayId::RWY_C), Some(AircraftId(3)));
    }

    #[test]
    fn mutual_exclusion_under_contention() {
        let mut m = RunwayManager::new();
        let mut granted = Vec::new();
        for id in 0..20 {
            let req = request(id, Flow::Arrival, Priority::Emergency, AircraftKind::Cargo);
            if let Ok(r) = m.allocate(&req) {
                granted.push(r);
            }
        }
        assert_eq!(granted, vec![RunwayId::RWY_A, RunwayId::RWY_C]);
        for r in RunwayId::ALL {
            let holders = (0..20)
                .filter(|&id| m.held_by(AircraftId(id)) == Some(r))
                .count();
            assert!(holders <= 1);
        }
    }
}
