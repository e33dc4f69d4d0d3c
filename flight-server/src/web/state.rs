//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::SearchConfig;
use crate::repository::FlightRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Flight data source
    pub repository: Arc<dyn FlightRepository>,

    /// Itinerary search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(repository: Arc<dyn FlightRepository>, config: SearchConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
