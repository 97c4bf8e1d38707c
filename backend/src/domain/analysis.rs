//! Shape of a sanitised comment analysis.
//!
//! The model returns free-form JSON. [`sanitize_analysis`] coerces it into
//! [`AnalysisResult`], whose invariants every stored or returned analysis
//! satisfies:
//!
//! - `risk_score` lies in `[0, 10]`;
//! - the three linguistic percentages lie in `[0, 100]`;
//! - every [`Level`] field falls back to `low` when missing or unknown.

mod sanitize;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Level, StrategyId};

pub use sanitize::sanitize_analysis;

/// Inclusive upper bound for [`AnalysisResult::risk_score`].
pub const MAX_RISK_SCORE: f64 = 10.0;
/// Inclusive upper bound for the linguistic percentages.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Result of analysing a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub risk_score: f64,
    pub risk_level: Level,
    pub categories: AnalysisCategories,
    pub recommended_strategies: Vec<StrategyId>,
    /// Optional deep linguistic breakdown, passed through unvalidated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linguistic_analysis: Option<Value>,
}

/// Grouped analysis dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCategories {
    pub linguistic: LinguisticScores,
    pub cyberbullying: CyberbullyingIndicators,
    pub communication: CommunicationProfile,
}

/// Percentage scores describing the wording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticScores {
    pub negative_language: f64,
    pub aggressive_words: f64,
    pub emotional_intensity: f64,
}

/// Ratings of common cyberbullying patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyberbullyingIndicators {
    pub degradation: Level,
    pub isolation: Level,
    pub power_imbalance: Level,
}

/// Communicative stance of the comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationProfile {
    pub tone: String,
    pub intention: String,
    pub escalation_potential: Level,
}
