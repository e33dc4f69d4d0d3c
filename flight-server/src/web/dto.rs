//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Flight;
use crate::planner::{Category, PriceOrder, RankedItinerary, TimeOrder};

/// Request body for itinerary search.
#[derive(Debug, Deserialize)]
pub struct SearchFlightsRequest {
    /// Origin city name
    pub from_city: String,

    /// Destination city name
    pub to_city: String,

    /// Start of the inclusive departure window
    pub date_from: NaiveDateTime,

    /// End of the inclusive departure window
    pub date_to: NaiveDateTime,

    /// Seats required on every leg (defaults to 1)
    #[serde(default = "default_passengers")]
    pub passengers: u32,

    /// City that must appear somewhere along the itinerary
    #[serde(default)]
    pub via_city: Option<String>,
}

fn default_passengers() -> u32 {
    1
}

/// Query-string ordering parameters for itinerary search.
///
/// `order_by_time` takes precedence over `order_by` when both are set.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub order_by: Option<PriceOrder>,
    pub order_by_time: Option<TimeOrder>,
}

/// A flight in a search result, with the derived seat count.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub id: i64,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub price: f64,
    pub available_seats: u32,
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            id: flight.id(),
            departure_city: flight.departure_city().as_str().to_string(),
            arrival_city: flight.arrival_city().as_str().to_string(),
            departure_time: flight.departure_time(),
            arrival_time: flight.arrival_time(),
            price: flight.price(),
            available_seats: flight.available_seats(),
        }
    }
}

/// A ranked itinerary in a search response.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Visited cities in order, origin first
    pub path: Vec<String>,

    /// Legs in order
    pub flights: Vec<FlightResult>,

    /// Summed price across all legs
    pub total_price: f64,

    /// Flight plus layover time, in hours
    pub total_time: f64,

    /// "fastest", "cheapest" or null
    pub category: Option<Category>,
}

impl ItineraryResult {
    /// Create from a ranked itinerary.
    pub fn from_ranked(ranked: &RankedItinerary) -> Self {
        Self {
            path: ranked
                .itinerary
                .path()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            flights: ranked
                .itinerary
                .legs()
                .iter()
                .map(|leg| FlightResult::from_flight(leg))
                .collect(),
            total_price: ranked.itinerary.total_price(),
            total_time: ranked.itinerary.total_time_hours(),
            category: ranked.category,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
