//! Flight data access.
//!
//! The search core depends on a single collaborator: something that can
//! produce the candidate flights for a date window. The trait keeps the
//! planner testable and leaves persistence concerns (database, remote
//! API) behind the seam.

mod error;
mod memory;

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::Flight;

pub use error::RepositoryError;
pub use memory::InMemoryFlightRepository;

/// Trait for providing candidate flights.
///
/// This abstraction allows the planner to be tested with fixture data.
pub trait FlightRepository: Send + Sync {
    /// Get all flights whose departure time falls within
    /// `[date_from, date_to]` (inclusive both ends) and which still have
    /// at least `min_seats` seats available.
    ///
    /// Ordering of the returned flights is unspecified; the planner
    /// sorts internally as needed.
    fn fetch_candidate_flights(
        &self,
        date_from: NaiveDateTime,
        date_to: NaiveDateTime,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, RepositoryError>;
}
