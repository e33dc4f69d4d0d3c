//! In-memory flight repository.
//!
//! Holds the flight network in process memory, optionally seeded from a
//! JSON file. This is the backing store for local runs and tests; a
//! production deployment would put a database behind the same trait.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::{City, DomainError, Flight};

use super::error::RepositoryError;
use super::FlightRepository;

/// A flight as it appears in the JSON data file.
#[derive(Debug, Deserialize)]
struct FlightRecord {
    id: i64,
    departure_city: String,
    arrival_city: String,
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
    price: f64,
    total_seats: u32,
    #[serde(default)]
    booked_seats: u32,
}

impl FlightRecord {
    fn into_flight(self) -> Result<Flight, DomainError> {
        Flight::new(
            self.id,
            City::new(self.departure_city),
            City::new(self.arrival_city),
            self.departure_time,
            self.arrival_time,
            self.price,
            self.total_seats,
            self.booked_seats,
        )
    }
}

/// Flight repository backed by an in-memory list.
#[derive(Debug, Default)]
pub struct InMemoryFlightRepository {
    flights: RwLock<Vec<Arc<Flight>>>,
}

impl InMemoryFlightRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded from a JSON file containing an array
    /// of flight records.
    ///
    /// Every record is validated; one bad record fails the whole load.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let json = std::fs::read_to_string(path)?;
        let records: Vec<FlightRecord> = serde_json::from_str(&json)?;

        let mut flights = Vec::with_capacity(records.len());
        for record in records {
            flights.push(Arc::new(record.into_flight()?));
        }

        Ok(Self {
            flights: RwLock::new(flights),
        })
    }

    /// Adds a flight to the repository.
    pub fn insert(&self, flight: Flight) {
        self.flights
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(flight));
    }

    /// Returns the number of flights held.
    pub fn len(&self) -> usize {
        self.flights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if the repository holds no flights.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FlightRepository for InMemoryFlightRepository {
    fn fetch_candidate_flights(
        &self,
        date_from: NaiveDateTime,
        date_to: NaiveDateTime,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, RepositoryError> {
        let flights = self.flights.read().unwrap_or_else(PoisonError::into_inner);

        Ok(flights
            .iter()
            .filter(|f| {
                f.departure_time() >= date_from
                    && f.departure_time() <= date_to
                    && f.available_seats() >= min_seats
            })
            .cloned()
            .collect())
    }
}
