//! `atc-fleet`: the authoritative aircraft table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`aircraft`]  | `Aircraft`, `AircraftSpec`                                   |
//! | [`store`]     | `FleetStore` (aircraft table), `FleetRngs` (per-aircraft RNG)|
//! | [`roster`]    | `Airline`, `Roster`, `load_roster_csv`, `load_roster_reader` |
//! | [`builder`]   | `FleetBuilder` (flight generation from a roster)             |
//! | [`request`]   | `FlightRequest`, `FleetStore::add_flight`                    |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                               |
//!
//! # Runway bookkeeping
//!
//! An aircraft's held runway is written only by [`FleetStore::assign_runway`],
//! [`FleetStore::release_runway`], and [`FleetStore::remove`], each of which
//! goes through the [`RunwayManager`][atc_runway::RunwayManager] in the same
//! call.  `remove` always releases first, so an aircraft can never leave the
//! table while the manager still lists it as a holder.

pub mod aircraft;
pub mod builder;
pub mod error;
pub mod request;
pub mod roster;
pub mod store;


pub use aircraft::{Aircraft, AircraftSpec};
pub use builder::FleetBuilder;
pub use error::{FleetError, FleetResult};
pub use request::FlightRequest;
pub use roster::{Airline, Roster, load_roster_csv, load_roster_reader};
pub use store::{FleetRngs, FleetStore};
