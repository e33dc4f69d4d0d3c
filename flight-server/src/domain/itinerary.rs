//! Itinerary types.
//!
//! An `Itinerary` is a completed multi-leg trip from origin to
//! destination: the ordered sequence of cities visited plus the flights
//! connecting them. Itineraries are constructed once by the search
//! engine and never mutated afterwards.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::{City, DomainError, Flight};

/// A complete itinerary from origin to destination.
///
/// # Invariants
///
/// - The path contains at least the origin city
/// - There is exactly one leg per consecutive city pair
///   (`legs.len() + 1 == path.len()`)
/// - Leg `i` departs `path[i]` and arrives at `path[i + 1]`
///
/// Zero legs is legal: it is the degenerate case where origin and
/// destination coincide, with a total price and time of zero.
#[derive(Debug, Clone)]
pub struct Itinerary {
    path: Vec<City>,
    legs: Vec<Arc<Flight>>,
    total_time_hours: f64,
    total_price: f64,
}

impl Itinerary {
    /// Constructs an itinerary from a visited-city path and its legs.
    ///
    /// `total_time_hours` is the accumulated flight plus layover time as
    /// computed during search. The total price is derived here as the
    /// sum of per-leg prices.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path is empty, the leg count does not match
    /// the path, or a leg does not connect its neighbouring cities.
    pub fn new(
        path: Vec<City>,
        legs: Vec<Arc<Flight>>,
        total_time_hours: f64,
    ) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if legs.len() + 1 != path.len() {
            return Err(DomainError::LegCountMismatch {
                legs: legs.len(),
                cities: path.len(),
            });
        }
        for (index, leg) in legs.iter().enumerate() {
            if leg.departure_city() != &path[index] || leg.arrival_city() != &path[index + 1] {
                return Err(DomainError::DisconnectedLeg { index });
            }
        }

        let total_price = legs.iter().map(|leg| leg.price()).sum();

        Ok(Itinerary {
            path,
            legs,
            total_time_hours,
            total_price,
        })
    }

    /// Returns the visited cities in order, origin first.
    pub fn path(&self) -> &[City] {
        &self.path
    }

    /// Returns the legs in order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the origin city.
    pub fn origin(&self) -> &City {
        // Safe: validated non-empty at construction
        self.path.first().unwrap()
    }

    /// Returns the final city.
    pub fn destination(&self) -> &City {
        // Safe: validated non-empty at construction
        self.path.last().unwrap()
    }

    /// Returns the first leg's departure time, or `None` for a
    /// zero-leg itinerary.
    pub fn first_departure(&self) -> Option<NaiveDateTime> {
        self.legs.first().map(|leg| leg.departure_time())
    }

    /// Returns the accumulated flight plus layover time, in hours.
    pub fn total_time_hours(&self) -> f64 {
        self.total_time_hours
    }

    /// Returns the summed price across all legs.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns true if this itinerary is a single nonstop flight.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }
}
