//! The fixed response schema every itinerary request carries

use crate::llm::SchemaNode;

/// Name the schema is registered under with providers that need one
pub const SCHEMA_NAME: &str = "student_itinerary";

/// Expected shape of the generated itinerary
///
/// destination string; itinerary array of {day, title, activities[],
/// dailyBudget}; each activity {time, description, estimatedCost}.
pub fn itinerary_schema() -> SchemaNode {
    let activity = SchemaNode::object(vec![
        (
            "time",
            SchemaNode::string("Suggested time for the activity, e.g., '9:00 AM' or 'Afternoon'."),
        ),
        (
            "description",
            SchemaNode::string(
                "A detailed, engaging description of the activity, including location and student-friendly tips.",
            ),
        ),
        (
            "estimatedCost",
            SchemaNode::string("Estimated cost for a student, e.g., '~$15' or 'Free'."),
        ),
    ]);

    let day = SchemaNode::object(vec![
        (
            "day",
            SchemaNode::integer("The day number of the trip, starting from 1."),
        ),
        (
            "title",
            SchemaNode::string("A catchy and descriptive title for the day's theme."),
        ),
        (
            "activities",
            SchemaNode::array("A list of activities planned for the day.", activity),
        ),
        (
            "dailyBudget",
            SchemaNode::string("An estimated total budget for the day's activities for a student."),
        ),
    ]);

    SchemaNode::object(vec![
        (
            "destination",
            SchemaNode::string("The destination city and country, e.g., 'Tokyo, Japan'."),
        ),
        ("itinerary", SchemaNode::array("An array of daily itinerary plans.", day)),
    ])
}
