//! Validated planning request built from the form inputs

use thiserror::Error;
use tracing::debug;

use super::{BudgetTier, Interest};

/// Local validation failure; never reaches the generation service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a destination.")]
    MissingDestination,

    #[error("Please select at least one interest.")]
    NoInterests,
}

/// One submission's worth of input: destination, budget tier and interests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    destination: String,
    budget: BudgetTier,
    interests: Vec<Interest>,
}

impl PlanRequest {
    /// Validate form inputs and build a request
    ///
    /// The destination is checked before the interests, so a form with both
    /// problems reports the missing destination. Duplicate interests are
    /// dropped; the first-selected order is kept.
    pub fn new(
        destination: impl Into<String>,
        budget: BudgetTier,
        interests: impl IntoIterator<Item = Interest>,
    ) -> Result<Self, FormError> {
        let destination = destination.into();
        debug!(%destination, %budget, "PlanRequest::new: called");

        if destination.trim().is_empty() {
            debug!("PlanRequest::new: destination is blank");
            return Err(FormError::MissingDestination);
        }

        let mut unique = Vec::new();
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }

        if unique.is_empty() {
            debug!("PlanRequest::new: no interests selected");
            return Err(FormError::NoInterests);
        }

        Ok(Self {
            destination,
            budget,
            interests: unique,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    /// Interests joined the way the prompt lists them: `food, culture`
    pub fn interests_label(&self) -> String {
        self.interests.iter().map(|i| i.label()).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_destination_rejected() {
        for destination in ["", "   ", "\t\n"] {
            let err = PlanRequest::new(destination, BudgetTier::Moderate, [Interest::Food]).unwrap_err();
            assert_eq!(err, FormError::MissingDestination);
        }
    }

    #[test]
    fn test_no_interests_rejected() {
        let err = PlanRequest::new("Lisbon", BudgetTier::Moderate, []).unwrap_err();
        assert_eq!(err, FormError::NoInterests);
        assert_eq!(err.to_string(), "Please select at least one interest.");
    }

    #[test]
    fn test_destination_checked_first() {
        let err = PlanRequest::new(" ", BudgetTier::Shoestring, []).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a destination.");
    }

    #[test]
    fn test_interests_deduplicated_in_selection_order() {
        let req = PlanRequest::new(
            "Tokyo, Japan",
            BudgetTier::Moderate,
            [Interest::Food, Interest::Culture, Interest::Food],
        )
        .unwrap();
        assert_eq!(req.interests(), &[Interest::Food, Interest::Culture]);
        assert_eq!(req.interests_label(), "food, culture");
    }

    #[test]
    fn test_destination_kept_as_entered() {
        let req = PlanRequest::new("Tokyo, Japan", BudgetTier::Comfortable, [Interest::Art]).unwrap();
        assert_eq!(req.destination(), "Tokyo, Japan");
        assert_eq!(req.budget(), BudgetTier::Comfortable);
    }
}
