//! tower: runs the airport scheduler end to end and writes CSV output.
//!
//! ```text
//! tower [config.json] [roster.csv]
//! ```
//!
//! Both arguments are optional.  Without them the built-in roster below is
//! flown under `SimConfig::default()` with the constants in this file.
//! Set `RUST_LOG=debug` to see every phase transition and runway hand-off.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use atc_core::{SimConfig, Tick};
use atc_fleet::{Roster, load_roster_csv, load_roster_reader};
use atc_lifecycle::StandardPhaseModel;
use atc_monitor::{Avn, AvnLedger};
use atc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use atc_sim::{AircraftSnapshot, FaultEvent, SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 120;
const OUTPUT_DIR:  &str = "output/tower";

// ── Roster CSV ────────────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
name,code,kind,fleet_size,flight_count\n\
PIA,PIA,commercial,6,4\n\
AirBlue,ABQ,commercial,4,4\n\
FedEx,FDX,cargo,3,2\n\
Pakistan Airforce,PAF,military,2,1\n\
Blue Dart,BDA,cargo,2,2\n\
AghaKhan Air Ambulance,AKA,medical,2,1\n\
";

// ── Observer wrapper to print events ─────────────────────────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:    SimOutputObserver<W>,
    admitted: usize,
    faults:   usize,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, admitted: 0, faults: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_violation(&mut self, avn: &Avn) {
        println!(
            "[{}] AVN #{} {} in {} at {:.1} km/h",
            avn.issued_at, avn.id.0, avn.flight_number, avn.phase, avn.speed
        );
    }

    fn on_fault(&mut self, event: &FaultEvent) {
        self.faults += 1;
        println!(
            "[{}] ground fault: {} removed during {}",
            event.tick, event.flight_number, event.phase
        );
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.admitted += summary.admitted;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, aircraft: &[AircraftSnapshot]) {
        self.inner.on_snapshot(tick, aircraft);
    }

    fn on_sim_end(&mut self, final_tick: Tick, ledger: &AvnLedger) {
        self.inner.on_sim_end(final_tick, ledger);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", p.display()))
        }
        None => Ok(SimConfig {
            start_unix_secs: 1_700_000_000,
            total_ticks:     TOTAL_TICKS,
            seed:            SEED,
            ..SimConfig::default()
        }),
    }
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let roster = match path {
        Some(p) => load_roster_csv(p).with_context(|| format!("loading roster {}", p.display()))?,
        None => load_roster_reader(Cursor::new(ROSTER_CSV))?,
    };
    Ok(roster)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let config = load_config(args.first().map(PathBuf::as_path))?;
    let roster = load_roster(args.get(1).map(PathBuf::as_path))?;

    println!("=== tower: airport flight scheduler ===");
    println!(
        "Airlines: {}  |  Flights: {}  |  Ticks: {}  |  Seed: {}",
        roster.len(),
        roster.total_flights(),
        config.total_ticks,
        config.seed
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config.clone(), roster, StandardPhaseModel::new()).build()?;

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    tracing::info!(dir = OUTPUT_DIR, "csv output ready");
    let mut obs = ConsoleObserver::new(SimOutputObserver::new(writer, &config));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  admitted: {}  |  faults: {}  |  AVNs: {} ({} active)",
        obs.admitted,
        obs.faults,
        sim.ledger().len(),
        sim.ledger().active().count()
    );
    println!("  output written to {OUTPUT_DIR}/");
    println!();

    // 5. Final status table.
    println!(
        "{:<8} {:<8} {:<10} {:<13} {:>7} {:<6} {:<4}",
        "Flight", "Airline", "Kind", "Phase", "km/h", "Runway", "AVN"
    );
    println!("{}", "-".repeat(62));
    for s in sim.snapshot() {
        println!(
            "{:<8} {:<8} {:<10} {:<13} {:>7.1} {:<6} {:<4}",
            s.flight_number,
            s.airline,
            s.kind.as_str(),
            s.phase.as_str(),
            s.speed,
            s.runway_name(),
            if s.violation_flag { "yes" } else { "" },
        );
    }

    Ok(())
}
