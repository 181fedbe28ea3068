//! Airline roster and its CSV loader.
//!
//! # CSV format
//!
//! One row per airline:
//!
//! ```csv
//! name,code,kind,fleet_size,flight_count
//! PIA,PIA,commercial,6,4
//! FedEx,FDX,cargo,3,2
//! AghaKhan Air Ambulance,AKA,medical,2,1
//! ```
//!
//! `kind` is one of `commercial`, `cargo`, `military`, `medical`
//! (case-insensitive).  `flight_count` flights are generated per airline and
//! may not exceed `fleet_size`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use atc_core::AirlineKind;

use crate::{FleetError, FleetResult};

// ── Airline ───────────────────────────────────────────────────────────────────

/// One operator in the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Airline {
    pub name:         String,
    /// Flight-number prefix, unique within the roster.
    pub code:         String,
    pub kind:         AirlineKind,
    /// Aircraft owned; caps how many of this airline's flights may be live.
    pub fleet_size:   u32,
    /// Flights generated at start-up.
    pub flight_count: u32,
}

impl Airline {
    pub fn new(name: &str, code: &str, kind: AirlineKind, fleet_size: u32, flight_count: u32) -> Self {
        Self {
            name: name.to_owned(),
            code: code.to_owned(),
            kind,
            fleet_size,
            flight_count,
        }
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// The validated list of airlines operating at the airport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    airlines: Vec<Airline>,
}

impl Roster {
    /// Build a roster, rejecting duplicate codes, codes whose flight numbers
    /// could clash (`A` and `A1` both yield `A11`), and airlines that would
    /// generate more flights than they own aircraft.
    pub fn new(airlines: Vec<Airline>) -> FleetResult<Self> {
        for (i, airline) in airlines.iter().enumerate() {
            if airline.code.trim().is_empty() {
                return Err(FleetError::Roster(format!("airline {:?} has an empty code", airline.name)));
            }
            if airlines[..i].iter().any(|a| a.code == airline.code) {
                return Err(FleetError::Roster(format!("duplicate airline code {:?}", airline.code)));
            }
            if let Some(other) = airlines[..i]
                .iter()
                .find(|a| codes_overlap(&a.code, &airline.code))
            {
                return Err(FleetError::Roster(format!(
                    "airline codes {:?} and {:?} can generate the same flight number",
                    other.code, airline.code
                )));
            }
            if airline.flight_count > airline.fleet_size {
                return Err(FleetError::Roster(format!(
                    "{} schedules {} flights with only {} aircraft",
                    airline.name, airline.flight_count, airline.fleet_size
                )));
            }
        }
        Ok(Self { airlines })
    }

    pub fn airlines(&self) -> &[Airline] {
        &self.airlines
    }

    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }

    /// Look up an airline by code, falling back to a case-insensitive name
    /// match.
    pub fn find(&self, key: &str) -> Option<&Airline> {
        self.airlines
            .iter()
            .find(|a| a.code == key)
            .or_else(|| self.airlines.iter().find(|a| a.name.eq_ignore_ascii_case(key)))
    }

    /// Total flights generated at start-up.
    pub fn total_flights(&self) -> usize {
        self.airlines.iter().map(|a| a.flight_count as usize).sum()
    }
}

/// `true` if one code is the other followed only by digits, so `<code><n>`
/// flight numbers from the two can coincide.
fn codes_overlap(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    long.strip_prefix(short)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|c| c.is_ascii_digit()))
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AirlineRecord {
    name:         String,
    code:         String,
    kind:         String,
    fleet_size:   u32,
    flight_count: u32,
}

/// Load a [`Roster`] from a CSV file.
pub fn load_roster_csv(path: &Path) -> FleetResult<Roster> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> FleetResult<Roster> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let airlines = csv_reader
        .deserialize::<AirlineRecord>()
        .map(|result| {
            let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
            let kind = row.kind.parse::<AirlineKind>().map_err(FleetError::Parse)?;
            Ok(Airline {
                name: row.name,
                code: row.code,
                kind,
                fleet_size: row.fleet_size,
                flight_count: row.flight_count,
            })
        })
        .collect::<FleetResult<Vec<_>>>()?;

    Roster::new(airlines)
}
