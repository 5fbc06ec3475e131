//! Plan requester
//!
//! Turns a validated `PlanRequest` into a prompt plus the fixed itinerary
//! schema, sends it once, and parses the answer into an `ItineraryPlan`.

mod schema;
mod service;

pub use schema::{SCHEMA_NAME, itinerary_schema};
pub use service::{GenerationFailure, PlanError, Planner};
