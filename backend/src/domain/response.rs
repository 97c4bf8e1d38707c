//! Generated replies tied to a comment and a strategy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CommentId, ContextInfo, StrategyId};

/// Store-assigned response identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(i32);

impl ResponseId {
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

/// A stored, immutable generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponse {
    pub id: ResponseId,
    pub comment_id: CommentId,
    pub strategy_id: StrategyId,
    pub generated_text: String,
    /// Context the reply was generated with, if any.
    pub context: Option<ContextInfo>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a generated reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGeneratedResponse {
    pub comment_id: CommentId,
    pub strategy_id: StrategyId,
    pub generated_text: String,
    pub context: Option<ContextInfo>,
}
