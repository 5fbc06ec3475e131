//! Itinerary types returned by the generation service
//!
//! Field names follow the wire schema (`dailyBudget`, `estimatedCost`).
//! Parsing fails closed: anything that does not match the requested shape is
//! an `ItineraryError`, never a partially filled plan.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Number of days every generated trip covers
pub const TRIP_DAYS: u32 = 5;

/// Full multi-day plan for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub destination: String,
    pub itinerary: Vec<ItineraryDay>,
}

/// One day of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub title: String,
    pub activities: Vec<ItineraryActivity>,
    pub daily_budget: String,
}

/// A single scheduled item within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryActivity {
    /// Free-form label such as "9:00 AM" or "Afternoon"
    pub time: String,
    pub description: String,
    /// Free-form label such as "~$15" or "Free"
    pub estimated_cost: String,
}

/// Why a response body could not become an `ItineraryPlan`
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("response is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response has no itinerary array")]
    MissingItinerary,

    #[error("response does not match the itinerary schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("day {day} is outside 1..={max}")]
    DayOutOfRange { day: u32, max: u32 },
}

impl ItineraryPlan {
    /// Parse a generation response body into a plan
    ///
    /// Surrounding whitespace and a Markdown code fence are tolerated.
    pub fn from_response_text(text: &str) -> Result<Self, ItineraryError> {
        debug!(text_len = text.len(), "ItineraryPlan::from_response_text: called");
        let body = strip_code_fence(text);

        let value: serde_json::Value = serde_json::from_str(body).map_err(ItineraryError::Json)?;
        let object = value.as_object().ok_or(ItineraryError::NotAnObject)?;

        match object.get("itinerary") {
            Some(serde_json::Value::Array(_)) => {}
            _ => {
                debug!("ItineraryPlan::from_response_text: itinerary missing or not an array");
                return Err(ItineraryError::MissingItinerary);
            }
        }

        let plan: Self = serde_json::from_value(value).map_err(ItineraryError::Schema)?;
        plan.validate()?;

        debug!(days = plan.itinerary.len(), "ItineraryPlan::from_response_text: parsed");
        Ok(plan)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), ItineraryError> {
        for day in &self.itinerary {
            if day.day == 0 || day.day > TRIP_DAYS {
                return Err(ItineraryError::DayOutOfRange {
                    day: day.day,
                    max: TRIP_DAYS,
                });
            }
        }
        Ok(())
    }

    /// Total number of activities across all days
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|d| d.activities.len()).sum()
    }
}

/// Strip a surrounding ```json ... ``` fence if the model added one
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DAYS: &str = r#"{
        "destination": "Tokyo, Japan",
        "itinerary": [
            {
                "day": 1,
                "title": "Neon & Noodles",
                "dailyBudget": "~$40",
                "activities": [
                    {"time": "9:00 AM", "description": "Explore Meiji Shrine", "estimatedCost": "Free"},
                    {"time": "Evening", "description": "Ramen dinner in Shinjuku", "estimatedCost": "~$10"}
                ]
            },
            {
                "day": 2,
                "title": "Temples and Markets",
                "dailyBudget": "~$35",
                "activities": [
                    {"time": "Morning", "description": "Tsukiji outer market", "estimatedCost": "~$15"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parses_well_formed_response() {
        let plan = ItineraryPlan::from_response_text(TWO_DAYS).unwrap();
        assert_eq!(plan.destination, "Tokyo, Japan");
        assert_eq!(plan.itinerary.len(), 2);
        assert_eq!(plan.itinerary[0].daily_budget, "~$40");
        assert_eq!(plan.itinerary[0].activities[1].estimated_cost, "~$10");
        assert_eq!(plan.activity_count(), 3);
    }

    #[test]
    fn test_plan_equals_parsed_json() {
        let plan = ItineraryPlan::from_response_text(TWO_DAYS).unwrap();
        let original: serde_json::Value = serde_json::from_str(TWO_DAYS).unwrap();
        assert_eq!(serde_json::to_value(&plan).unwrap(), original);
    }

    #[test]
    fn test_missing_itinerary() {
        let err = ItineraryPlan::from_response_text(r#"{"destination": "Rome"}"#).unwrap_err();
        assert!(matches!(err, ItineraryError::MissingItinerary));
    }

    #[test]
    fn test_itinerary_not_array() {
        let err = ItineraryPlan::from_response_text(r#"{"destination": "Rome", "itinerary": {"day": 1}}"#).unwrap_err();
        assert!(matches!(err, ItineraryError::MissingItinerary));
    }

    #[test]
    fn test_not_json() {
        let err = ItineraryPlan::from_response_text("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, ItineraryError::Json(_)));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = ItineraryPlan::from_response_text("[]").unwrap_err();
        assert!(matches!(err, ItineraryError::NotAnObject));
    }

    #[test]
    fn test_missing_activity_field_fails_closed() {
        let body = r#"{
            "destination": "Rome",
            "itinerary": [
                {"day": 1, "title": "Ancient", "dailyBudget": "$20",
                 "activities": [{"time": "Noon", "description": "Colosseum"}]}
            ]
        }"#;
        let err = ItineraryPlan::from_response_text(body).unwrap_err();
        assert!(matches!(err, ItineraryError::Schema(_)));
    }

    #[test]
    fn test_wrong_field_type_fails_closed() {
        let body = r#"{"destination": "Rome", "itinerary": [
            {"day": "one", "title": "x", "dailyBudget": "$1", "activities": []}
        ]}"#;
        let err = ItineraryPlan::from_response_text(body).unwrap_err();
        assert!(matches!(err, ItineraryError::Schema(_)));
    }

    #[test]
    fn test_day_out_of_range() {
        let body = r#"{"destination": "Rome", "itinerary": [
            {"day": 6, "title": "Extra", "dailyBudget": "$1", "activities": []}
        ]}"#;
        let err = ItineraryPlan::from_response_text(body).unwrap_err();
        assert!(matches!(err, ItineraryError::DayOutOfRange { day: 6, max: 5 }));

        let body = body.replace("\"day\": 6", "\"day\": 0");
        assert!(ItineraryPlan::from_response_text(&body).is_err());
    }

    #[test]
    fn test_unrequested_fields_ignored() {
        let body = r#"{"destination": "Rome", "itinerary": [
            {"day": 1, "title": "x", "dailyBudget": "$1", "activities": [
                {"time": "Noon", "description": "Pizza", "estimatedCost": "$5",
                 "location": {"latitude": 41.9, "longitude": 12.5}}
            ]}
        ]}"#;
        let plan = ItineraryPlan::from_response_text(body).unwrap();
        assert_eq!(plan.itinerary[0].activities[0].description, "Pizza");
    }

    #[test]
    fn test_code_fence_stripped() {
        let fenced = format!("```json\n{}\n```", TWO_DAYS);
        let plan = ItineraryPlan::from_response_text(&fenced).unwrap();
        assert_eq!(plan.itinerary.len(), 2);
    }

    #[test]
    fn test_empty_itinerary_is_valid() {
        let plan = ItineraryPlan::from_response_text(r#"{"destination": "Oslo", "itinerary": []}"#).unwrap();
        assert!(plan.itinerary.is_empty());
    }
}
