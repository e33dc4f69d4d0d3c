//! Domain validation errors.

/// Error from constructing a domain value that violates an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Flight price is negative or not a finite number
    #[error("flight {0} has a negative or non-finite price")]
    InvalidPrice(i64),

    /// More seats booked than the aircraft has
    #[error("flight {0} has more booked seats than total seats")]
    Overbooked(i64),

    /// Flight arrives before it departs
    #[error("flight {0} arrives before it departs")]
    ArrivesBeforeDeparture(i64),

    /// Itinerary path has no cities at all
    #[error("itinerary path must contain at least the origin city")]
    EmptyPath,

    /// Leg count does not match the visited-city count
    #[error("itinerary has {legs} legs for a path of {cities} cities")]
    LegCountMismatch { legs: usize, cities: usize },

    /// A leg does not connect its neighbouring cities in the path
    #[error("leg {index} does not connect consecutive cities in the path")]
    DisconnectedLeg { index: usize },
}
