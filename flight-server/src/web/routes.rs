//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::error;

use crate::domain::City;
use crate::planner::{ResultOrder, SearchCriteria, SearchError, search_ranked};

use super::dto::{ErrorResponse, ItineraryResult, OrderQuery, SearchFlightsRequest};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights/search", post(search_flights))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for itineraries between two cities.
///
/// The core performs no input validation: unknown cities or an inverted
/// date window simply produce an empty result list. Malformed bodies
/// and query strings are rejected by the extractors before we get here.
async fn search_flights(
    State(state): State<AppState>,
    Query(order): Query<OrderQuery>,
    Json(req): Json<SearchFlightsRequest>,
) -> Result<Json<Vec<ItineraryResult>>, AppError> {
    let criteria = SearchCriteria {
        from_city: City::new(req.from_city),
        to_city: City::new(req.to_city),
        date_from: req.date_from,
        date_to: req.date_to,
        passengers: req.passengers,
        via_city: req.via_city.map(City::new),
    };
    let order = ResultOrder {
        by_price: order.order_by,
        by_time: order.order_by_time,
    };

    let ranked = search_ranked(
        state.repository.as_ref(),
        &criteria,
        &order,
        &state.config,
    )?;

    Ok(Json(
        ranked.iter().map(ItineraryResult::from_ranked).collect(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
