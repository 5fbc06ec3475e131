//! Display model built from an itinerary
//!
//! Borrows the plan and only reorders references for display; the plan
//! itself is never modified.

use tracing::debug;

use super::classify::{ActivityCategory, classify};
use crate::domain::{ItineraryDay, ItineraryPlan, TRIP_DAYS};

/// Read-only view of a whole plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanView<'a> {
    pub destination: &'a str,
    pub trip_days: u32,
    pub days: Vec<DaySection<'a>>,
}

/// One titled day section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection<'a> {
    pub day: u32,
    pub title: &'a str,
    pub daily_budget: &'a str,
    pub entries: Vec<TimelineEntry<'a>>,
}

/// One activity on a day's timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub time: &'a str,
    pub description: &'a str,
    pub estimated_cost: &'a str,
    pub category: ActivityCategory,
}

impl<'a> PlanView<'a> {
    /// Build the view: days in ascending `day` order, activities in array order
    pub fn from_plan(plan: &'a ItineraryPlan) -> Self {
        debug!(days = plan.itinerary.len(), "PlanView::from_plan: called");
        let mut days: Vec<&ItineraryDay> = plan.itinerary.iter().collect();
        days.sort_by_key(|d| d.day);

        Self {
            destination: &plan.destination,
            trip_days: TRIP_DAYS,
            days: days.into_iter().map(DaySection::from_day).collect(),
        }
    }
}

impl<'a> DaySection<'a> {
    fn from_day(day: &'a ItineraryDay) -> Self {
        Self {
            day: day.day,
            title: &day.title,
            daily_budget: &day.daily_budget,
            entries: day
                .activities
                .iter()
                .map(|a| TimelineEntry {
                    time: &a.time,
                    description: &a.description,
                    estimated_cost: &a.estimated_cost,
                    category: classify(&a.description),
                })
                .collect(),
        }
    }

    /// Heading text: `Day 1: Neon & Noodles`
    pub fn heading(&self) -> String {
        format!("Day {}: {}", self.day, self.title)
    }
}
