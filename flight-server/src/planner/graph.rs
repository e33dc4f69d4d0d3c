//! Route graph over candidate flights.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{City, Flight};

/// Adjacency structure mapping each departure city to its outgoing
/// flights.
///
/// Built once per search from the repository's candidate set, accepted
/// as-is: window and seat filtering are the repository's job. Each
/// adjacency list is sorted by departure time (flight id as tiebreak)
/// so that expansion order during search is deterministic.
#[derive(Debug, Default)]
pub struct RouteGraph {
    edges: HashMap<City, Vec<Arc<Flight>>>,
}

impl RouteGraph {
    /// Builds the graph by grouping flights by departure city.
    pub fn build(flights: Vec<Arc<Flight>>) -> Self {
        let mut edges: HashMap<City, Vec<Arc<Flight>>> = HashMap::new();

        for flight in flights {
            edges
                .entry(flight.departure_city().clone())
                .or_default()
                .push(flight);
        }

        for list in edges.values_mut() {
            list.sort_by_key(|f| (f.departure_time(), f.id()));
        }

        Self { edges }
    }

    /// Returns the outgoing flights from a city, earliest departure
    /// first. Unknown cities have no departures.
    pub fn departures_from(&self, city: &City) -> &[Arc<Flight>] {
        self.edges.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the graph holds no flights at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of cities with at least one departure.
    pub fn city_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total number of flights in the graph.
    pub fn flight_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
