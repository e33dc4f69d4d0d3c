//! Web layer: HTTP routes, DTOs and shared state.

mod dto;
mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
