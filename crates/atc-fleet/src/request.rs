//! Injecting flights outside the start-up generator.

use atc_core::{AircraftId, Direction, Priority, Tick};

use crate::{AircraftSpec, FleetError, FleetResult, FleetStore, Roster};

/// A request to add one flight to a running simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightRequest {
    /// Roster code or airline name.
    pub airline:       String,
    pub flight_number: String,
    pub direction:     Direction,
    /// `None` takes the airline's default priority.
    pub priority:      Option<Priority>,
    pub scheduled:     Tick,
}

impl FlightRequest {
    pub fn new(airline: &str, flight_number: &str, direction: Direction, scheduled: Tick) -> Self {
        Self {
            airline: airline.to_owned(),
            flight_number: flight_number.to_owned(),
            direction,
            priority: None,
            scheduled,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl FleetStore {
    /// Validate `request` against `roster` and insert it in `Awaiting`.
    ///
    /// Fails with [`FleetError::UnknownAirline`], [`FleetError::DuplicateFlight`],
    /// or [`FleetError::FleetCapacity`] when the airline already has
    /// `fleet_size` live aircraft.  Nothing is inserted on failure.
    pub fn add_flight(
        &mut self,
        request: FlightRequest,
        roster:  &Roster,
        now:     Tick,
    ) -> FleetResult<AircraftId> {
        let airline = roster
            .find(&request.airline)
            .ok_or_else(|| FleetError::UnknownAirline(request.airline.clone()))?;

        if self.find_by_flight(&request.flight_number).is_some() {
            return Err(FleetError::DuplicateFlight(request.flight_number));
        }
        if self.count_for_airline(&airline.code) >= airline.fleet_size as usize {
            return Err(FleetError::FleetCapacity {
                airline:    airline.code.clone(),
                fleet_size: airline.fleet_size,
            });
        }

        let spec = AircraftSpec {
            flight_number: request.flight_number,
            airline:       airline.code.clone(),
            category:      airline.kind,
            direction:     request.direction,
            priority:      request.priority.unwrap_or(airline.kind.default_priority()),
            scheduled:     request.scheduled,
        };
        let id = self.insert(spec, now)?;
        tracing::info!(%id, airline = %airline.code, "flight added");
        Ok(id)
    }
}
