//! Caller-supplied analysis parameters and situational context.
//!
//! Both objects are optional on requests. When present they must match the
//! closed vocabularies below; unknown keys are ignored.

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),* $(,)? }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )*
        }

        impl $name {
            /// Wire representation.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Severity band the caller wants checked.
    pub enum SeverityLevel {
        Light => "light",
        Medium => "medium",
        Severe => "severe",
    }
}

wire_enum! {
    /// Kind of harm the caller wants the analysis to focus on.
    pub enum HarmCategory {
        Insult => "insult",
        Threat => "threat",
        Discrimination => "discrimination",
        Harassment => "harassment",
    }
}

wire_enum! {
    /// Setting in which the comment was posted.
    pub enum Setting {
        Public => "public",
        Private => "private",
        Professional => "professional",
    }
}

wire_enum! {
    /// Relationship between the recipient and the author of the comment.
    pub enum Relationship {
        Unknown => "unknown",
        Colleague => "colleague",
        Friend => "friend",
        Family => "family",
        Other => "other",
    }
}

wire_enum! {
    /// Outcome the recipient is aiming for.
    pub enum DesiredReaction {
        Deescalate => "deescalate",
        Confront => "confront",
        Ignore => "ignore",
        Report => "report",
    }
}

/// Manual analysis parameters. All three lists are required; they may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParameters {
    pub severity_levels: Vec<SeverityLevel>,
    pub categories: Vec<HarmCategory>,
    pub context: Vec<Setting>,
}

/// Situational context for analysis and response generation.
///
/// # Examples
/// ```
/// use commentguard::domain::{ContextInfo, DesiredReaction, Relationship};
///
/// let context: ContextInfo = serde_json::from_value(serde_json::json!({
///     "relationship": "colleague",
///     "desiredReaction": "deescalate"
/// }))
/// .expect("valid context");
/// assert_eq!(context.relationship, Relationship::Colleague);
/// assert_eq!(context.desired_reaction, DesiredReaction::Deescalate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    pub relationship: Relationship,
    pub desired_reaction: DesiredReaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}
