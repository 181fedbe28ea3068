//! Unit tests for atc-schedule.

#[cfg(test)]
mod helpers {
    use atc_core::{AircraftId, AirlineKind, Direction, Priority, Tick};
    use atc_fleet::{AircraftSpec, FleetStore};

    pub fn add(fleet: &mut FleetStore, flight: &str, dir: Direction, priority: Priority, scheduled: u64) -> AircraftId {
        let spec = AircraftSpec {
            flight_number: flight.to_owned(),
            airline:       "TST".to_owned(),
            category:      AirlineKind::Commercial,
            direction:     dir,
            priority,
            scheduled:     Tick(scheduled),
        };
        fleet.insert(spec, Tick(0)).unwrap()
    }
}

#[cfg(test)]
mod ordering {
    use atc_core::{Direction, Flow, Phase, Priority, Tick};
    use atc_fleet::FleetStore;

    use super::helpers::add;
    use crate::AdmissionQueues;

    #[test]
    fn partitions_by_direction() {
        let mut fleet = FleetStore::new();
        let n = add(&mut fleet, "N1", Direction::North, Priority::Commercial, 0);
        let e = add(&mut fleet, "E1", Direction::East, Priority::Commercial, 0);
        let s = add(&mut fleet, "S1", Direction::South, Priority::Commercial, 0);
        let w = add(&mut fleet, "W1", Direction::West, Priority::Commercial, 0);

        let q = AdmissionQueues::build(&fleet, Tick(0));
        assert_eq!(q.ids(Flow::Arrival), vec![n, s]);
        assert_eq!(q.ids(Flow::Departure), vec![e, w]);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn fcfs_within_class() {
        let mut fleet = FleetStore::new();
        let late = add(&mut fleet, "A", Direction::North, Priority::Commercial, 4);
        let early = add(&mut fleet, "B", Direction::North, Priority::Commercial, 1);
        let mid = add(&mut fleet, "C", Direction::North, Priority::Commercial, 2);

        let q = AdmissionQueues::build(&fleet, Tick(5));
        assert_eq!(q.ids(Flow::Arrival), vec![early, mid, late]);
        let times: Vec<_> = q.arrival.iter().map(|e| e.scheduled).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn classes_ordered_emergency_vip_cargo_commercial() {
        let mut fleet = FleetStore::new();
        let com = add(&mut fleet, "COM", Direction::East, Priority::Commercial, 0);
        let cgo = add(&mut fleet, "CGO", Direction::East, Priority::Cargo, 0);
        let vip = add(&mut fleet, "VIP", Direction::East, Priority::Vip, 0);
        let emg = add(&mut fleet, "EMG", Direction::East, Priority::Emergency, 3);

        let q = AdmissionQueues::build(&fleet, Tick(3));
        assert_eq!(q.ids(Flow::Departure), vec![emg, vip, cgo, com]);
    }

    #[test]
    fn ties_keep_id_order() {
        let mut fleet = FleetStore::new();
        let a = add(&mut fleet, "A", Direction::South, Priority::Cargo, 2);
        let b = add(&mut fleet, "B", Direction::North, Priority::Cargo, 2);
        let q = AdmissionQueues::build(&fleet, Tick(2));
        assert_eq!(q.ids(Flow::Arrival), vec![a, b]);
    }

    #[test]
    fn future_and_admitted_aircraft_excluded() {
        let mut fleet = FleetStore::new();
        let _future = add(&mut fleet, "F", Direction::North, Priority::Emergency, 9);
        let admitted = add(&mut fleet, "H", Direction::North, Priority::Emergency, 0);
        let waiting = add(&mut fleet, "W", Direction::North, Priority::Commercial, 0);
        fleet.get_mut(admitted).unwrap().phase = Phase::Holding;

        let q = AdmissionQueues::build(&fleet, Tick(1));
        assert_eq!(q.ids(Flow::Arrival), vec![waiting]);
        assert!(q.departure.is_empty());
    }

    #[test]
    fn empty_fleet_gives_empty_queues() {
        let q = AdmissionQueues::build(&FleetStore::new(), Tick(0));
        assert!(q.is_empty());
    }
}

#[cfg(test)]
mod service_order {
    use atc_core::{Direction, Flow, Priority, Tick};
    use atc_fleet::FleetStore;

    use super::helpers::add;
    use crate::AdmissionQueues;

    #[test]
    fn heads_interleave_by_key() {
        let mut fleet = FleetStore::new();
        let cargo_arr = add(&mut fleet, "CA", Direction::North, Priority::Cargo, 1);
        let com_arr = add(&mut fleet, "NA", Direction::South, Priority::Commercial, 0);
        let emg_dep = add(&mut fleet, "ED", Direction::East, Priority::Emergency, 1);
        let com_dep = add(&mut fleet, "ND", Direction::West, Priority::Commercial, 1);

        let q = AdmissionQueues::build(&fleet, Tick(1));
        let mut order = q.service_order();
        let mut served = Vec::new();
        while let Some((flow, entry)) = order.next_head() {
            served.push((flow, entry.aircraft));
        }
        assert_eq!(
            served,
            vec![
                (Flow::Departure, emg_dep),
                (Flow::Arrival, cargo_arr),
                (Flow::Arrival, com_arr),
                (Flow::Departure, com_dep),
            ]
        );
    }

    #[test]
    fn equal_keys_go_to_arrivals() {
        let mut fleet = FleetStore::new();
        let dep = add(&mut fleet, "D", Direction::East, Priority::Cargo, 0);
        let arr = add(&mut fleet, "A", Direction::North, Priority::Cargo, 0);

        let q = AdmissionQueues::build(&fleet, Tick(0));
        let mut order = q.service_order();
        assert_eq!(order.next_head().map(|(_, e)| e.aircraft), Some(arr));
        assert_eq!(order.next_head().map(|(_, e)| e.aircraft), Some(dep));
        assert!(order.next_head().is_none());
    }

    #[test]
    fn stopped_queue_yields_nothing_more() {
        let mut fleet = FleetStore::new();
        let a1 = add(&mut fleet, "A1", Direction::North, Priority::Emergency, 0);
        let _a2 = add(&mut fleet, "A2", Direction::North, Priority::Emergency, 0);
        let d1 = add(&mut fleet, "D1", Direction::East, Priority::Commercial, 0);

        let q = AdmissionQueues::build(&fleet, Tick(0));
        let mut order = q.service_order();
        assert_eq!(order.next_head(), Some((Flow::Arrival, q.arrival[0])));
        assert_eq!(q.arrival[0].aircraft, a1);
        order.stop(Flow::Arrival);
        assert_eq!(order.remaining(Flow::Arrival), 1);

        assert_eq!(order.next_head().map(|(_, e)| e.aircraft), Some(d1));
        assert!(order.next_head().is_none());
        assert_eq!(order.remaining(Flow::Departure), 0);
    }
}
