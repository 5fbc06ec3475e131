//! Domain types for the trip planner
//!
//! Form inputs (budget tier, interests, the validated request) and the
//! itinerary returned by the generation service.

mod budget;
mod interest;
mod itinerary;
mod request;

pub use budget::BudgetTier;
pub use interest::Interest;
pub use itinerary::{ItineraryActivity, ItineraryDay, ItineraryError, ItineraryPlan, TRIP_DAYS};
pub use request::{FormError, PlanRequest};
