//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when template files are not found.

/// Itinerary request prompt
///
/// Variables: `destination`, `budget`, `interests`, `days`.
pub const ITINERARY: &str = r#"You are an expert travel planner specializing in creating exciting, budget-friendly itineraries for students.
A student wants to plan a {{days}}-day trip. Please generate a detailed {{days}}-day itinerary based on the following details:

Destination: {{destination}}
Budget Level: {{budget}}
Interests: {{interests}}

Your response must be a JSON object that strictly adheres to the provided schema.
For each activity, provide a fun, engaging description that would appeal to a student traveler.
Include practical tips like cheap eats, free walking tours, student discounts, or best photo spots.
Ensure the costs and suggestions are realistic for the specified student budget level.
The daily title should be creative and reflect the day's main focus.
"#;

/// Look up an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "itinerary" => Some(ITINERARY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded() {
        assert!(get_embedded("itinerary").is_some());
        assert!(get_embedded("nope").is_none());
    }

    #[test]
    fn test_itinerary_mentions_every_variable() {
        for var in ["{{days}}", "{{destination}}", "{{budget}}", "{{interests}}"] {
            assert!(ITINERARY.contains(var), "missing {}", var);
        }
    }
}
