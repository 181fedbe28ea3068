//! Classification enums shared by every crate: airline category, aircraft
//! kind, compass direction, traffic flow, and priority class.

use std::fmt;

// ── AirlineKind ───────────────────────────────────────────────────────────────

/// Category of an operator in the airline roster.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirlineKind {
    Commercial,
    Cargo,
    Military,
    Medical,
}

impl AirlineKind {
    /// Aircraft kind flown by this category.  Military and medical operators
    /// both fly emergency aircraft.
    pub fn aircraft_kind(self) -> AircraftKind {
        match self {
            AirlineKind::Commercial => AircraftKind::Commercial,
            AirlineKind::Cargo => AircraftKind::Cargo,
            AirlineKind::Military | AirlineKind::Medical => AircraftKind::Emergency,
        }
    }

    /// Default priority class for flights of this category.
    pub fn default_priority(self) -> Priority {
        match self {
            AirlineKind::Commercial => Priority::Commercial,
            AirlineKind::Cargo => Priority::Cargo,
            AirlineKind::Military | AirlineKind::Medical => Priority::Emergency,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AirlineKind::Commercial => "commercial",
            AirlineKind::Cargo      => "cargo",
            AirlineKind::Military   => "military",
            AirlineKind::Medical    => "medical",
        }
    }
}

impl std::str::FromStr for AirlineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commercial" => Ok(AirlineKind::Commercial),
            "cargo" => Ok(AirlineKind::Cargo),
            "military" => Ok(AirlineKind::Military),
            "medical" => Ok(AirlineKind::Medical),
            other => Err(format!(
                "invalid airline kind {other:?}: expected commercial, cargo, military, or medical"
            )),
        }
    }
}

// ── AircraftKind ──────────────────────────────────────────────────────────────

/// Operational kind of an aircraft, derived from its airline's category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AircraftKind {
    Commercial,
    Cargo,
    Emergency,
}

impl AircraftKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AircraftKind::Commercial => "commercial",
            AircraftKind::Cargo      => "cargo",
            AircraftKind::Emergency  => "emergency",
        }
    }
}

// ── Direction / Flow ──────────────────────────────────────────────────────────

/// Compass direction of travel.  North/South traffic is arriving, East/West
/// traffic is departing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    #[inline]
    pub fn flow(self) -> Flow {
        match self {
            Direction::North | Direction::South => Flow::Arrival,
            Direction::East | Direction::West => Flow::Departure,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East  => "east",
            Direction::West  => "west",
        }
    }
}

/// Which half of the lifecycle graph an aircraft follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    Arrival,
    Departure,
}

// ── Priority ──────────────────────────────────────────────────────────────────

/// Admission priority class.  Declaration order is service order: the derived
/// `Ord` sorts `Emergency` first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Emergency,
    Vip,
    Cargo,
    Commercial,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency  => "emergency",
            Priority::Vip        => "vip",
            Priority::Cargo      => "cargo",
            Priority::Commercial => "commercial",
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(AirlineKind, AircraftKind, Direction, Priority);
