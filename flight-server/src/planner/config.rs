//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum layover between consecutive legs (hours).
    /// Connections with a longer gap are pruned during search.
    pub max_layover_hours: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_layover_hours: i64) -> Self {
        Self { max_layover_hours }
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::hours(self.max_layover_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_layover_hours: 24,
        }
    }
}
