//! Integration tests for atc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AircraftSnapshotRow, TickSummaryRow, ViolationRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(aircraft_id: u32, tick: u64) -> AircraftSnapshotRow {
        AircraftSnapshotRow {
            tick,
            aircraft_id,
            flight_number:  format!("PIA{}", aircraft_id + 1),
            airline:        "PIA".to_owned(),
            kind:           "commercial",
            phase:          "holding",
            speed:          512.0,
            direction:      "north",
            priority:       "commercial",
            runway:         "RWY-A",
            violation_flag: false,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("aircraft_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("violations.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("aircraft_snapshots.csv")),
            [
                "tick", "aircraft_id", "flight_number", "airline", "kind", "phase",
                "speed", "direction", "priority", "runway", "violation_flag",
            ]
        );
        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "unix_time_secs", "admitted", "transitions", "violations", "faults", "active"]
        );
        assert_eq!(
            headers(dir.path().join("violations.csv")),
            ["avn_id", "tick", "unix_time_secs", "aircraft_id", "flight_number", "phase", "speed", "active"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("aircraft_snapshots.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][2], "PIA2");
        assert_eq!(&records[0][6], "512.0");
        assert_eq!(&records[0][9], "RWY-A");
        assert_eq!(&records[0][10], "0");
    }

    #[test]
    fn csv_summary_and_violation_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:           3,
            unix_time_secs: 180,
            admitted:       2,
            transitions:    1,
            violations:     1,
            faults:         0,
            active:         14,
        })
        .unwrap();
        w.write_violations(&[ViolationRow {
            avn_id:         1,
            tick:           3,
            unix_time_secs: 180,
            aircraft_id:    9,
            flight_number:  "FDX1".to_owned(),
            phase:          "takeoff_roll",
            speed:          300.0,
            active:         true,
        }])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(row.iter().collect::<Vec<_>>(), ["3", "180", "2", "1", "1", "0", "14"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("violations.csv")).unwrap();
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(row.iter().collect::<Vec<_>>(), ["1", "3", "180", "9", "FDX1", "takeoff_roll", "300.0", "1"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use atc_core::{AirlineKind, SimConfig, Tick};
    use atc_fleet::{Airline, Roster};
    use atc_lifecycle::StandardPhaseModel;
    use atc_monitor::AvnLedger;
    use atc_sim::{SimBuilder, SimObserver, TickSummary};

    use crate::{CsvWriter, SimOutputObserver};

    fn config(total_ticks: u64) -> SimConfig {
        SimConfig {
            start_unix_secs:   1_000,
            total_ticks,
            seed:              3,
            fault_probability: 0.0,
            ..SimConfig::default()
        }
    }

    fn roster() -> Roster {
        Roster::new(vec![
            Airline::new("PIA", "PIA", AirlineKind::Commercial, 2, 2),
            Airline::new("FedEx", "FDX", AirlineKind::Cargo, 1, 1),
        ])
        .unwrap()
    }

    fn count_rows(dir: &TempDir, file: &str) -> usize {
        csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
    }

    #[test]
    fn full_run_writes_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(30);
        let mut sim = SimBuilder::new(config.clone(), roster(), StandardPhaseModel::new())
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        assert_eq!(count_rows(&dir, "tick_summaries.csv"), 30);
        // No faults, so all three aircraft appear in every snapshot.
        assert_eq!(count_rows(&dir, "aircraft_snapshots.csv"), 30 * 3);
        assert_eq!(count_rows(&dir, "violations.csv"), sim.ledger().len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let second = rdr.records().nth(1).unwrap().unwrap();
        assert_eq!(&second[1], "1060");
    }

    #[test]
    fn summary_times_follow_sim_clock() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig { start_unix_secs: 500, tick_duration_secs: 30, ..config(10) };
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        obs.on_tick_end(Tick(4), &TickSummary::default());
        obs.on_sim_end(Tick(5), &AvnLedger::new());
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "4");
        assert_eq!(&row[1], &config.make_clock().unix_secs_at(Tick(4)).to_string());
        assert_eq!(&row[1], "620");
    }

    #[test]
    fn snapshot_interval_respected() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig { output_interval_ticks: 10, ..config(30) };
        let mut sim = SimBuilder::new(config.clone(), roster(), StandardPhaseModel::new())
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        sim.run(&mut obs).unwrap();

        // Ticks 0, 10, 20.
        assert_eq!(count_rows(&dir, "aircraft_snapshots.csv"), 3 * 3);
    }
}
