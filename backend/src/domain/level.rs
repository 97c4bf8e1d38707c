//! Three-step severity scale shared by analysis results and strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordinal `low | medium | high` rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Lowest rating; also the fallback for unrecognised input.
    #[default]
    Low,
    /// Middle rating.
    Medium,
    /// Highest rating.
    High,
}

impl Level {
    /// Lower-case wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is not one of `low`, `medium`, `high`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseLevelError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("low", Level::Low)]
    #[case("medium", Level::Medium)]
    #[case("high", Level::High)]
    fn parses_known_levels(#[case] text: &str, #[case] expected: Level) {
        assert_eq!(text.parse::<Level>(), Ok(expected));
        assert_eq!(expected.to_string(), text);
    }

    #[rstest]
    #[case("HIGH")]
    #[case("critical")]
    #[case("")]
    fn rejects_anything_else(#[case] text: &str) {
        assert!(text.parse::<Level>().is_err());
    }

    #[test]
    fn default_is_low() {
        assert_eq!(Level::default(), Level::Low);
    }
}
