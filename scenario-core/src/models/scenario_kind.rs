use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a scenario key does not name one of the four scenarios.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scenario '{0}'")]
pub struct UnknownScenario(pub String);

/// The four scenarios compared side by side, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Investment,
    RenovateToLive,
    RenovateToRent,
    CurrentHome,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        Self::Investment,
        Self::RenovateToLive,
        Self::RenovateToRent,
        Self::CurrentHome,
    ];

    /// Stable key used in field keys, CSV headers and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investment => "investment",
            Self::RenovateToLive => "renovate_to_live",
            Self::RenovateToRent => "renovate_to_rent",
            Self::CurrentHome => "current_home",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "investment" => Some(Self::Investment),
            "renovate_to_live" => Some(Self::RenovateToLive),
            "renovate_to_rent" => Some(Self::RenovateToRent),
            "current_home" => Some(Self::CurrentHome),
            _ => None,
        }
    }

    /// Full scenario name shown on result cards and in recommendations.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Investment => "Invested Money",
            Self::RenovateToLive => "Renovate to Live",
            Self::RenovateToRent => "Renovate to Rent",
            Self::CurrentHome => "Stay in Current Home",
        }
    }

    /// Short label used on chart axes.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Investment => "Investment",
            Self::RenovateToLive => "Reno. Live",
            Self::RenovateToRent => "Reno. Rent",
            Self::CurrentHome => "Current Home",
        }
    }

    /// Position in [`ScenarioKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Investment => 0,
            Self::RenovateToLive => 1,
            Self::RenovateToRent => 2,
            Self::CurrentHome => 3,
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_key() {
        for kind in ScenarioKind::ALL {
            assert_eq!(ScenarioKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        let err = "beach_house".parse::<ScenarioKind>().unwrap_err();

        assert_eq!(err, UnknownScenario("beach_house".to_string()));
        assert_eq!(err.to_string(), "unknown scenario 'beach_house'");
    }

    #[test]
    fn index_matches_display_order() {
        for (i, kind) in ScenarioKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
