//! Driving port for reply generation.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CommentContent, CommentId, ContextInfo, Error, GeneratedResponse, Strategy, StrategyId};

/// Comment a reply is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// A comment already in the store.
    Stored(CommentId),
    /// Text that is stored as a new comment before generating.
    Inline(CommentContent),
}

/// Request to generate a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponseRequest {
    pub target: CommentTarget,
    pub strategy_id: StrategyId,
    pub context: Option<ContextInfo>,
}

/// Stored reply together with the strategy it follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseResponse {
    pub response: GeneratedResponse,
    pub strategy: Strategy,
}

/// Driving port for generating replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerateResponseCommand: Send + Sync {
    /// Generate and persist one reply.
    ///
    /// # Errors
    ///
    /// - `not_found` when the comment or the strategy does not exist.
    /// - `internal_error` when the model call or storage fails.
    async fn generate(
        &self,
        request: GenerateResponseRequest,
    ) -> Result<GenerateResponseResponse, Error>;
}
