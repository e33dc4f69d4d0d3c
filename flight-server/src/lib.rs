//! Flight itinerary search server.
//!
//! A web service that answers: "how can I fly from here to there in this
//! date window, and which options are fastest or cheapest?"

pub mod domain;
pub mod planner;
pub mod repository;
pub mod web;
