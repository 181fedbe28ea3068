//! Unit tests for atc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AircraftId, AvnId, RunwayId};

    #[test]
    fn index_roundtrip() {
        let id = AircraftId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AircraftId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AircraftId::INVALID.0, u32::MAX);
        assert_eq!(RunwayId::INVALID.0, u8::MAX);
        assert_eq!(AvnId::INVALID.0, u64::MAX);
    }

    #[test]
    fn runway_names() {
        assert_eq!(RunwayId::RWY_A.name(), "RWY-A");
        assert_eq!(RunwayId::RWY_B.name(), "RWY-B");
        assert_eq!(RunwayId::RWY_C.name(), "RWY-C");
        assert_eq!(RunwayId(9).name(), "none");
    }

    #[test]
    fn display() {
        assert_eq!(AircraftId(7).to_string(), "AircraftId(7)");
    }
}

#[cfg(test)]
mod kinds {
    use crate::{AircraftKind, AirlineKind, Direction, Flow, Priority};

    #[test]
    fn airline_kind_maps_to_aircraft_kind() {
        assert_eq!(AirlineKind::Commercial.aircraft_kind(), AircraftKind::Commercial);
        assert_eq!(AirlineKind::Cargo.aircraft_kind(), AircraftKind::Cargo);
        assert_eq!(AirlineKind::Military.aircraft_kind(), AircraftKind::Emergency);
        assert_eq!(AirlineKind::Medical.aircraft_kind(), AircraftKind::Emergency);
    }

    #[test]
    fn priority_orders_emergency_first() {
        let mut p = vec![Priority::Commercial, Priority::Cargo, Priority::Emergency, Priority::Vip];
        p.sort();
        assert_eq!(p, vec![Priority::Emergency, Priority::Vip, Priority::Cargo, Priority::Commercial]);
    }

    #[test]
    fn direction_flow() {
        assert_eq!(Direction::North.flow(), Flow::Arrival);
        assert_eq!(Direction::South.flow(), Flow::Arrival);
        assert_eq!(Direction::East.flow(), Flow::Departure);
        assert_eq!(Direction::West.flow(), Flow::Departure);
    }

    #[test]
    fn airline_kind_parses_case_insensitively() {
        assert_eq!("Medical".parse::<AirlineKind>().unwrap(), AirlineKind::Medical);
        assert_eq!(" cargo ".parse::<AirlineKind>().unwrap(), AirlineKind::Cargo);
        assert!("zeppelin".parse::<AirlineKind>().is_err());
    }
}

#[cfg(test)]
mod phase {
    use crate::{Flow, Phase, PhaseTimings};

    #[test]
    fn arrival_path() {
        let mut p = Phase::Awaiting;
        let mut path = vec![p];
        while let Some(next) = p.next(Flow::Arrival) {
            p = next;
            path.push(p);
        }
        assert_eq!(
            path,
            vec![Phase::Awaiting, Phase::Holding, Phase::Approach, Phase::Landing, Phase::Taxi, Phase::AtGate]
        );
    }

    #[test]
    fn departure_path() {
        let mut p = Phase::Awaiting;
        let mut path = vec![p];
        while let Some(next) = p.next(Flow::Departure) {
            p = next;
            path.push(p);
        }
        assert_eq!(
            path,
            vec![
                Phase::Awaiting, Phase::Taxi, Phase::TakeoffRoll,
                Phase::Climb, Phase::Cruise, Phase::Departure,
            ]
        );
    }

    #[test]
    fn invalid_edges_rejected() {
        assert!(!Phase::Holding.can_transition_to(Phase::Landing, Flow::Arrival));
        assert!(!Phase::Taxi.can_transition_to(Phase::TakeoffRoll, Flow::Arrival));
        assert!(Phase::Taxi.can_transition_to(Phase::TakeoffRoll, Flow::Departure));
    }

    #[test]
    fn ground_phases() {
        let ground: Vec<Phase> = Phase::ALL.into_iter().filter(|p| p.is_ground()).collect();
        assert_eq!(ground, vec![Phase::Taxi, Phase::AtGate]);
    }

    #[test]
    fn envelope_literals() {
        assert!(Phase::Cruise.envelope().unwrap().is_violated(750.0));
        assert!(!Phase::AtGate.envelope().unwrap().is_violated(5.0));
        assert!(Phase::TakeoffRoll.envelope().unwrap().is_violated(295.0));
        assert!(!Phase::Holding.envelope().unwrap().is_violated(300.0));
    }

    #[test]
    fn envelope_bounds_are_inclusive() {
        let approach = Phase::Approach.envelope().unwrap();
        assert!(!approach.is_violated(240.0));
        assert!(!approach.is_violated(290.0));
        assert!(approach.is_violated(239.9));
        assert!(approach.is_violated(290.1));
    }

    #[test]
    fn unmonitored_phases() {
        assert!(Phase::Awaiting.envelope().is_none());
        assert!(Phase::Departure.envelope().is_none());
    }

    #[test]
    fn dwell_only_for_timed_phases() {
        let t = PhaseTimings::default();
        assert_eq!(t.dwell(Phase::Awaiting), None);
        assert_eq!(t.dwell(Phase::Departure), None);
        assert_eq!(t.dwell(Phase::TakeoffRoll), Some(t.takeoff_roll));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(5)), 0);
        assert_eq!(Tick(3) - Tick(5), 0u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(1_000, 60);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 60);
        assert_eq!(clock.current_unix_secs(), 1_060);
        assert_eq!(clock.unix_secs_at(Tick(10)), 1_600);
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new(0, 60);
        for _ in 0..61 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T61 (01:01:00)");
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0, 60);
        assert_eq!(clock.ticks_for_secs(0), 0);
        assert_eq!(clock.ticks_for_secs(1), 1);
        assert_eq!(clock.ticks_for_secs(300), 5);
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.fault_probability, 0.05);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { fault_probability: 1.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AircraftId, AircraftRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AircraftRng::new(12345, AircraftId(0));
        let mut r2 = AircraftRng::new(12345, AircraftId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_aircraft_differ() {
        let mut r0 = AircraftRng::new(1, AircraftId(0));
        let mut r1 = AircraftRng::new(1, AircraftId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent aircraft should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_bool_nan_never_fires() {
        let mut sim = SimRng::new(0);
        let mut aircraft = AircraftRng::new(0, AircraftId(0));
        for _ in 0..32 {
            assert!(!sim.gen_bool(f64::NAN));
            assert!(!aircraft.gen_bool(f64::NAN));
        }
        assert!(sim.gen_bool(f64::INFINITY));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
