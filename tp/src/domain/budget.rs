//! Budget tiers offered in the planner form

use serde::{Deserialize, Serialize};

/// Spending level the itinerary should be tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetTier {
    Shoestring,
    #[default]
    Moderate,
    Comfortable,
}

impl BudgetTier {
    /// Every tier, in the order the form lists them
    pub const ALL: [BudgetTier; 3] = [Self::Shoestring, Self::Moderate, Self::Comfortable];

    /// Label shown to the user and sent to the model
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shoestring => "Shoestring",
            Self::Moderate => "Moderate",
            Self::Comfortable => "Comfortable",
        }
    }

    /// One-line hint shown under the selector
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Shoestring => "Hostels, street food and free sights",
            Self::Moderate => "Budget hotels, local restaurants, a few paid attractions",
            Self::Comfortable => "Mid-range stays and the occasional splurge",
        }
    }

    /// Next tier in form order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Shoestring => Self::Moderate,
            Self::Moderate => Self::Comfortable,
            Self::Comfortable => Self::Shoestring,
        }
    }

    /// Previous tier in form order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Shoestring => Self::Comfortable,
            Self::Moderate => Self::Shoestring,
            Self::Comfortable => Self::Moderate,
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shoestring" => Ok(Self::Shoestring),
            "moderate" => Ok(Self::Moderate),
            "comfortable" => Ok(Self::Comfortable),
            _ => Err(format!(
                "Unknown budget tier: {}. Use: shoestring, moderate, or comfortable",
                s
            )),
        }
    }
}
