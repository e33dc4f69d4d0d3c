//! Flight record type.

use chrono::{Duration, NaiveDateTime};

use super::{City, DomainError};

/// A single scheduled flight between two cities.
///
/// The available seat count is derived from `total_seats - booked_seats`
/// and never stored. Invariants are enforced at construction:
///
/// - price is finite and non-negative
/// - `booked_seats <= total_seats`
/// - arrival is not before departure
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    id: i64,
    departure_city: City,
    arrival_city: City,
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
    price: f64,
    total_seats: u32,
    booked_seats: u32,
}

impl Flight {
    /// Constructs a flight, validating its invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        departure_city: City,
        arrival_city: City,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
        price: f64,
        total_seats: u32,
        booked_seats: u32,
    ) -> Result<Self, DomainError> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice(id));
        }
        if booked_seats > total_seats {
            return Err(DomainError::Overbooked(id));
        }
        if arrival_time < departure_time {
            return Err(DomainError::ArrivesBeforeDeparture(id));
        }

        Ok(Flight {
            id,
            departure_city,
            arrival_city,
            departure_time,
            arrival_time,
            price,
            total_seats,
            booked_seats,
        })
    }

    /// Returns the flight identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the departure city.
    pub fn departure_city(&self) -> &City {
        &self.departure_city
    }

    /// Returns the arrival city.
    pub fn arrival_city(&self) -> &City {
        &self.arrival_city
    }

    /// Returns the scheduled departure time.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    /// Returns the scheduled arrival time.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.arrival_time
    }

    /// Returns the ticket price for one passenger.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the total seat count on the aircraft.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns the number of seats already booked.
    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    /// Returns the number of seats still available.
    pub fn available_seats(&self) -> u32 {
        self.total_seats - self.booked_seats
    }

    /// Returns the time in the air.
    pub fn duration(&self) -> Duration {
        self.arrival_time.signed_duration_since(self.departure_time)
    }

    /// Returns the time in the air, in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }
}
