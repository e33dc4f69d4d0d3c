use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flight_server::planner::SearchConfig;
use flight_server::repository::InMemoryFlightRepository;
use flight_server::web::{AppState, create_router};

/// Default flight network file, relative to the working directory.
const DEFAULT_FLIGHTS_FILE: &str = "data/flights.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flights_file =
        std::env::var("FLIGHTS_FILE").unwrap_or_else(|_| DEFAULT_FLIGHTS_FILE.to_string());

    let repository = match InMemoryFlightRepository::from_json_file(&flights_file) {
        Ok(repo) => {
            info!(file = %flights_file, flights = repo.len(), "loaded flight network");
            repo
        }
        Err(e) => {
            warn!(file = %flights_file, error = %e, "could not load flight network, starting empty");
            InMemoryFlightRepository::new()
        }
    };

    let state = AppState::new(Arc::new(repository), SearchConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("flight itinerary search listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
