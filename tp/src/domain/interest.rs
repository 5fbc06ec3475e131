//! Interest tags used to steer plan content

use serde::{Deserialize, Serialize};

/// Topical label from the fixed interest vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Food,
    Culture,
    History,
    Art,
    Nature,
    Adventure,
    Nightlife,
    Shopping,
    Music,
    Sports,
}

impl Interest {
    /// The whole vocabulary, in display order
    pub const ALL: [Interest; 10] = [
        Self::Food,
        Self::Culture,
        Self::History,
        Self::Art,
        Self::Nature,
        Self::Adventure,
        Self::Nightlife,
        Self::Shopping,
        Self::Music,
        Self::Sports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Culture => "culture",
            Self::History => "history",
            Self::Art => "art",
            Self::Nature => "nature",
            Self::Adventure => "adventure",
            Self::Nightlife => "nightlife",
            Self::Shopping => "shopping",
            Self::Music => "music",
            Self::Sports => "sports",
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.label() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|i| i.label()).collect();
                format!("Unknown interest: {}. Use one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = Interest::ALL.iter().map(|i| i.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Interest::ALL.len());
    }

    #[test]
    fn test_parse_roundtrips_label() {
        for interest in Interest::ALL {
            assert_eq!(interest.label().parse::<Interest>().unwrap(), interest);
        }
        assert_eq!("Food".parse::<Interest>().unwrap(), Interest::Food);
    }

    #[test]
    fn test_parse_unknown_lists_vocabulary() {
        let err = "skydiving".parse::<Interest>().unwrap_err();
        assert!(err.contains("skydiving"));
        assert!(err.contains("nightlife"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Interest::Nightlife).unwrap();
        assert_eq!(json, "\"nightlife\"");
    }
}
