//! Itinerary planner using BFS search.
//!
//! This module implements the core search algorithm that answers:
//! "how can I get from this city to that city within this date window?"
//!
//! The algorithm uses breadth-first search over flight legs to explore
//! possible routes, then tags and orders the completed itineraries by
//! speed and price.

mod config;
mod graph;
mod rank;
mod search;

pub use config::SearchConfig;
pub use graph::RouteGraph;
pub use rank::{
    Category, PriceOrder, RankedItinerary, ResultOrder, TimeOrder, categorize, rank_results,
};
pub use search::{SearchCriteria, SearchError, SearchOutcome, search_itineraries, search_ranked};
