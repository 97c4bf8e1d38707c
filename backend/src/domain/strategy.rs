//! Static catalogue of response strategies.
//!
//! The catalogue holds eight entries with fixed identifiers 1 to 8. Both
//! storage backends are seeded from [`predefined_strategies`] (the relational
//! store through its initial migration) so the two stay identical.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Level;

/// Catalogue identifier of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(i32);

impl StrategyId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad communication approach a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyCategory {
    Defensive,
    Passive,
    Assertive,
    Informative,
    Supportive,
    Deflective,
    Empathetic,
}

impl StrategyCategory {
    /// Lower-case wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defensive => "defensive",
            Self::Passive => "passive",
            Self::Assertive => "assertive",
            Self::Informative => "informative",
            Self::Supportive => "supportive",
            Self::Deflective => "deflective",
            Self::Empathetic => "empathetic",
        }
    }
}

impl fmt::Display for StrategyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for unknown category text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy category: {0}")]
pub struct ParseStrategyCategoryError(pub String);

impl FromStr for StrategyCategory {
    type Err = ParseStrategyCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "defensive" => Ok(Self::Defensive),
            "passive" => Ok(Self::Passive),
            "assertive" => Ok(Self::Assertive),
            "informative" => Ok(Self::Informative),
            "supportive" => Ok(Self::Supportive),
            "deflective" => Ok(Self::Deflective),
            "empathetic" => Ok(Self::Empathetic),
            other => Err(ParseStrategyCategoryError(other.to_owned())),
        }
    }
}

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: StrategyId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: StrategyCategory,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_level: Level,
}

struct Entry {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: StrategyCategory,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    risk_level: Level,
}

const CATALOGUE: [Entry; 8] = [
    Entry {
        name: "Deeskalation",
        description: "Beruhigt die Situation und reduziert Spannungen durch ruhige, verständnisvolle Kommunikation.",
        icon: "🕊️",
        category: StrategyCategory::Defensive,
        pros: &[
            "Vermeidet weitere Eskalation",
            "Professionelle Reaktion",
            "Bewahrt Ruhe",
        ],
        cons: &[
            "Könnte als Schwäche interpretiert werden",
            "Langsamere Konfliktlösung",
        ],
        risk_level: Level::Low,
    },
    Entry {
        name: "Ignorieren",
        description: "Keine Reaktion zeigen und dem Angreifer ins Leere laufen lassen.",
        icon: "🚫",
        category: StrategyCategory::Passive,
        pros: &[
            "Entzieht Aufmerksamkeit",
            "Vermeidet Eskalation",
            "Emotionale Distanz",
        ],
        cons: &[
            "Könnte Verhalten verstärken",
            "Keine Problemlösung",
            "Mögliche Eskalation",
        ],
        risk_level: Level::Medium,
    },
    Entry {
        name: "Direkte Konfrontation",
        description: "Klare Grenzen setzen und sich selbstbewusst zur Wehr setzen.",
        icon: "⚔️",
        category: StrategyCategory::Assertive,
        pros: &["Klare Kommunikation", "Setzt Grenzen", "Zeigt Stärke"],
        cons: &[
            "Kann Konflikt verstärken",
            "Erhöhte Emotionalität",
            "Unvorhersagbare Reaktion",
        ],
        risk_level: Level::High,
    },
    Entry {
        name: "Dokumentieren",
        description: "Screenshots und Beweise sammeln für spätere rechtliche oder disziplinarische Schritte.",
        icon: "📝",
        category: StrategyCategory::Informative,
        pros: &[
            "Rechtliche Absicherung",
            "Professioneller Ansatz",
            "Langfristige Lösung",
        ],
        cons: &["Keine sofortige Hilfe", "Zeitaufwendig", "Erfordert Mut"],
        risk_level: Level::Low,
    },
    Entry {
        name: "Hilfe holen",
        description: "Vertrauenspersonen, Beratungsstellen oder Autoritäten um Unterstützung bitten.",
        icon: "🆘",
        category: StrategyCategory::Supportive,
        pros: &[
            "Professionelle Unterstützung",
            "Geteilte Verantwortung",
            "Expertise",
        ],
        cons: &[
            "Abhängigkeit von anderen",
            "Mögliche Verzögerung",
            "Verlust der Kontrolle",
        ],
        risk_level: Level::Low,
    },
    Entry {
        name: "Humor/Deflection",
        description: "Mit Humor oder Ironie antworten um die Situation zu entschärfen.",
        icon: "😄",
        category: StrategyCategory::Deflective,
        pros: &[
            "Entschärft Situation",
            "Zeigt Gelassenheit",
            "Kann Sympathie erzeugen",
        ],
        cons: &[
            "Kann missverstanden werden",
            "Risiko der Verharmlosung",
            "Timing wichtig",
        ],
        risk_level: Level::Medium,
    },
    Entry {
        name: "Sachliche Korrektur",
        description: "Faktische Fehler korrigieren ohne emotional zu werden.",
        icon: "✅",
        category: StrategyCategory::Informative,
        pros: &["Stellt Fakten klar", "Professionell", "Bildend"],
        cons: &[
            "Kann als belehrend wirken",
            "Ignoriert emotionale Ebene",
            "Möglicherweise wirkungslos",
        ],
        risk_level: Level::Low,
    },
    Entry {
        name: "Empathische Reaktion",
        description: "Verständnis für mögliche Gründe des Verhaltens zeigen.",
        icon: "❤️",
        category: StrategyCategory::Empathetic,
        pros: &[
            "Zeigt Menschlichkeit",
            "Kann Aggression reduzieren",
            "Fördert Dialog",
        ],
        cons: &[
            "Kann als Schwäche interpretiert werden",
            "Rechtfertigt möglicherweise Verhalten",
            "Emotional belastend",
        ],
        risk_level: Level::Low,
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// The eight predefined strategies, ordered by id.
///
/// # Examples
/// ```
/// use commentguard::domain::predefined_strategies;
///
/// let catalogue = predefined_strategies();
/// assert_eq!(catalogue.len(), 8);
/// assert_eq!(catalogue[0].name, "Deeskalation");
/// ```
#[must_use]
pub fn predefined_strategies() -> Vec<Strategy> {
    (1..)
        .zip(CATALOGUE.iter())
        .map(|(id, entry)| Strategy {
            id: StrategyId::new(id),
            name: entry.name.to_owned(),
            description: entry.description.to_owned(),
            icon: entry.icon.to_owned(),
            category: entry.category,
            pros: owned(entry.pros),
            cons: owned(entry.cons),
            risk_level: entry.risk_level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn catalogue_ids_run_from_one_to_eight() {
        let ids: Vec<i32> = predefined_strategies()
            .iter()
            .map(|strategy| strategy.id.value())
            .collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(1, "Deeskalation", StrategyCategory::Defensive, Level::Low)]
    #[case(2, "Ignorieren", StrategyCategory::Passive, Level::Medium)]
    #[case(3, "Direkte Konfrontation", StrategyCategory::Assertive, Level::High)]
    #[case(6, "Humor/Deflection", StrategyCategory::Deflective, Level::Medium)]
    #[case(8, "Empathische Reaktion", StrategyCategory::Empathetic, Level::Low)]
    fn catalogue_entries_match_reference(
        #[case] id: i32,
        #[case] name: &str,
        #[case] category: StrategyCategory,
        #[case] risk: Level,
    ) {
        let strategy = predefined_strategies()
            .into_iter()
            .find(|strategy| strategy.id == StrategyId::new(id))
            .expect("strategy present");
        assert_eq!(strategy.name, name);
        assert_eq!(strategy.category, category);
        assert_eq!(strategy.risk_level, risk);
        assert!(!strategy.pros.is_empty());
        assert!(!strategy.cons.is_empty());
    }

    #[test]
    fn strategy_serialises_with_camel_case_keys() {
        let first = predefined_strategies().remove(0);
        let value = serde_json::to_value(first).expect("serialises");
        assert_eq!(value["riskLevel"], json!("low"));
        assert_eq!(value["category"], json!("defensive"));
        assert_eq!(value["icon"], json!("🕊️"));
    }

    #[test]
    fn category_round_trips_through_text() {
        for strategy in predefined_strategies() {
            let text = strategy.category.to_string();
            assert_eq!(text.parse::<StrategyCategory>(), Ok(strategy.category));
        }
    }
}
