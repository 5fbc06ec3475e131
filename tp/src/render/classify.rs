//! Keyword classifier choosing an icon category for an activity
//!
//! Presentation only: the category never feeds back into plan data.

/// Display category for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCategory {
    Food,
    Culture,
    Adventure,
    Nightlife,
    Default,
}

impl ActivityCategory {
    /// Glyph used in the timeline gutter
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "🍜",
            Self::Culture => "🏛",
            Self::Adventure => "⛰",
            Self::Nightlife => "🎶",
            Self::Default => "📅",
        }
    }

    /// ASCII fallback for plain output
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Food => "[food]",
            Self::Culture => "[culture]",
            Self::Adventure => "[adventure]",
            Self::Nightlife => "[nightlife]",
            Self::Default => "[activity]",
        }
    }
}

/// Rules in priority order; the first rule with a matching keyword wins
const RULES: &[(&[&str], ActivityCategory)] = &[
    (
        &["eat", "food", "lunch", "dinner", "cafe", "market"],
        ActivityCategory::Food,
    ),
    (
        &["museum", "art", "gallery", "history", "temple", "shrine"],
        ActivityCategory::Culture,
    ),
    (
        &["hike", "park", "view", "nature", "explore", "walk"],
        ActivityCategory::Adventure,
    ),
    (&["bar", "club", "night", "music"], ActivityCategory::Nightlife),
];

/// Classify an activity description
///
/// Case-insensitive substring match, so "treat" hits "eat" and "party"
/// hits "art". Order of `RULES` decides overlaps.
pub fn classify(description: &str) -> ActivityCategory {
    let desc = description.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(ActivityCategory::Default)
}
