//! Coercion of raw model output into an [`AnalysisResult`].

use serde_json::Value;

use super::{
    AnalysisCategories, AnalysisResult, CommunicationProfile, CyberbullyingIndicators,
    LinguisticScores, MAX_PERCENTAGE, MAX_RISK_SCORE,
};
use crate::domain::{Level, StrategyId};

const DEFAULT_TONE: &str = "neutral";
const DEFAULT_INTENTION: &str = "unclear";
const FALLBACK_STRATEGY: StrategyId = StrategyId::new(1);

/// Coerce arbitrary JSON into a valid analysis.
///
/// Never fails: anything missing or malformed is replaced by its default.
/// Numbers (or numeric strings) are clamped into range; non-numeric values
/// become `0`.
///
/// # Examples
/// ```
/// use commentguard::domain::{Level, sanitize_analysis};
/// use serde_json::json;
///
/// let analysis = sanitize_analysis(&json!({ "riskScore": 42, "riskLevel": "severe" }));
/// assert_eq!(analysis.risk_score, 10.0);
/// assert_eq!(analysis.risk_level, Level::Low);
/// ```
#[must_use]
pub fn sanitize_analysis(raw: &Value) -> AnalysisResult {
    AnalysisResult {
        risk_score: clamped(raw.pointer("/riskScore"), MAX_RISK_SCORE),
        risk_level: level(raw.pointer("/riskLevel")),
        categories: AnalysisCategories {
            linguistic: LinguisticScores {
                negative_language: clamped(
                    raw.pointer("/categories/linguistic/negativeLanguage"),
                    MAX_PERCENTAGE,
                ),
                aggressive_words: clamped(
                    raw.pointer("/categories/linguistic/aggressiveWords"),
                    MAX_PERCENTAGE,
                ),
                emotional_intensity: clamped(
                    raw.pointer("/categories/linguistic/emotionalIntensity"),
                    MAX_PERCENTAGE,
                ),
            },
            cyberbullying: CyberbullyingIndicators {
                degradation: level(raw.pointer("/categories/cyberbullying/degradation")),
                isolation: level(raw.pointer("/categories/cyberbullying/isolation")),
                power_imbalance: level(raw.pointer("/categories/cyberbullying/powerImbalance")),
            },
            communication: CommunicationProfile {
                tone: text_or(raw.pointer("/categories/communication/tone"), DEFAULT_TONE),
                intention: text_or(
                    raw.pointer("/categories/communication/intention"),
                    DEFAULT_INTENTION,
                ),
                escalation_potential: level(
                    raw.pointer("/categories/communication/escalationPotential"),
                ),
            },
        },
        recommended_strategies: strategy_ids(raw.pointer("/recommendedStrategies")),
        linguistic_analysis: raw
            .get("linguisticAnalysis")
            .filter(|value| value.is_object())
            .cloned(),
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

fn clamped(value: Option<&Value>, max: f64) -> f64 {
    number(value).map_or(0.0, |number| number.clamp(0.0, max))
}

fn level(value: Option<&Value>) -> Level {
    value
        .and_then(Value::as_str)
        .and_then(|text| text.parse().ok())
        .unwrap_or_default()
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_owned()
}

fn strategy_ids(value: Option<&Value>) -> Vec<StrategyId> {
    let Some(items) = value.and_then(Value::as_array) else {
        return vec![FALLBACK_STRATEGY];
    };
    items
        .iter()
        .filter_map(|item| {
            if let Some(id) = item.as_i64() {
                return i32::try_from(id).ok();
            }
            let float = item.as_f64()?;
            // Integral floats such as `3.0` still name a strategy.
            let integral = float.fract() == 0.0
                && float >= f64::from(i32::MIN)
                && float <= f64::from(i32::MAX);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "value is integral and checked against the i32 range"
            )]
            let id = integral.then(|| float as i32);
            id
        })
        .map(StrategyId::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::above(json!(17.5), 10.0)]
    #[case::below(json!(-3), 0.0)]
    #[case::inside(json!(6.5), 6.5)]
    #[case::numeric_text(json!("7"), 7.0)]
    #[case::not_numeric(json!("high"), 0.0)]
    #[case::null(json!(null), 0.0)]
    fn risk_score_is_clamped(#[case] raw: Value, #[case] expected: f64) {
        let analysis = sanitize_analysis(&json!({ "riskScore": raw }));
        assert!((analysis.risk_score - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn percentages_are_clamped() {
        let analysis = sanitize_analysis(&json!({
            "categories": {
                "linguistic": {
                    "negativeLanguage": 250,
                    "aggressiveWords": -10,
                    "emotionalIntensity": 55
                }
            }
        }));
        let linguistic = analysis.categories.linguistic;
        assert!((linguistic.negative_language - 100.0).abs() < f64::EPSILON);
        assert!(linguistic.aggressive_words.abs() < f64::EPSILON);
        assert!((linguistic.emotional_intensity - 55.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case::unknown(json!("critical"))]
    #[case::wrong_case(json!("HIGH"))]
    #[case::number(json!(3))]
    #[case::missing(json!(null))]
    fn invalid_levels_default_to_low(#[case] raw: Value) {
        let analysis = sanitize_analysis(&json!({
            "riskLevel": raw,
            "categories": {
                "cyberbullying": {
                    "degradation": raw,
                    "isolation": raw,
                    "powerImbalance": raw
                },
                "communication": { "escalationPotential": raw }
            }
        }));

        assert_eq!(analysis.risk_level, Level::Low);
        assert_eq!(analysis.categories.cyberbullying.degradation, Level::Low);
        assert_eq!(analysis.categories.cyberbullying.isolation, Level::Low);
        assert_eq!(analysis.categories.cyberbullying.power_imbalance, Level::Low);
        assert_eq!(
            analysis.categories.communication.escalation_potential,
            Level::Low
        );
    }

    #[test]
    fn valid_levels_are_kept() {
        let analysis = sanitize_analysis(&json!({
            "riskLevel": "high",
            "categories": {
                "cyberbullying": {
                    "degradation": "medium",
                    "isolation": "high",
                    "powerImbalance": "low"
                }
            }
        }));
        assert_eq!(analysis.risk_level, Level::High);
        assert_eq!(analysis.categories.cyberbullying.degradation, Level::Medium);
        assert_eq!(analysis.categories.cyberbullying.isolation, Level::High);
    }

    #[test]
    fn empty_object_yields_all_defaults() {
        let analysis = sanitize_analysis(&json!({}));
        assert!(analysis.risk_score.abs() < f64::EPSILON);
        assert_eq!(analysis.categories.communication.tone, DEFAULT_TONE);
        assert_eq!(analysis.categories.communication.intention, DEFAULT_INTENTION);
        assert_eq!(analysis.recommended_strategies, vec![FALLBACK_STRATEGY]);
        assert!(analysis.linguistic_analysis.is_none());
    }

    #[test]
    fn non_object_input_yields_defaults() {
        let analysis = sanitize_analysis(&json!([1, 2, 3]));
        assert_eq!(analysis.risk_level, Level::Low);
        assert_eq!(analysis.recommended_strategies, vec![FALLBACK_STRATEGY]);
    }

    #[test]
    fn empty_tone_falls_back() {
        let analysis = sanitize_analysis(&json!({
            "categories": { "communication": { "tone": "", "intention": "provozieren" } }
        }));
        assert_eq!(analysis.categories.communication.tone, DEFAULT_TONE);
        assert_eq!(analysis.categories.communication.intention, "provozieren");
    }

    #[rstest]
    #[case::mixed(json!([1, "2", 3.0, 4.5, null, 7]), vec![1, 3, 7])]
    #[case::empty(json!([]), vec![])]
    #[case::not_array(json!("1,2"), vec![1])]
    #[case::out_of_range(json!([5_000_000_000_i64, 2]), vec![2])]
    fn recommended_strategies_keep_integral_numbers(
        #[case] raw: Value,
        #[case] expected: Vec<i32>,
    ) {
        let analysis = sanitize_analysis(&json!({ "recommendedStrategies": raw }));
        let ids: Vec<i32> = analysis
            .recommended_strategies
            .iter()
            .map(|id| id.value())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn linguistic_analysis_is_passed_through() {
        let deep = json!({ "pragmatic": { "speechActs": ["Expressive"] } });
        let analysis = sanitize_analysis(&json!({ "linguisticAnalysis": deep.clone() }));
        assert_eq!(analysis.linguistic_analysis, Some(deep));
    }
}
