//! Driving port for comment analysis.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    AnalysisParameters, AnalysisResult, Comment, CommentContent, ContextInfo, Error, Strategy,
};

/// Request to analyse a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeCommentRequest {
    pub content: CommentContent,
    pub parameters: Option<AnalysisParameters>,
    pub context: Option<ContextInfo>,
}

/// Outcome of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentResponse {
    /// The stored comment with its analysis attached.
    pub comment: Comment,
    pub analysis: AnalysisResult,
    /// Catalogue entries named by the analysis; unknown ids are dropped.
    pub recommended_strategies: Vec<Strategy>,
}

/// Driving port for analysing comments.
///
/// Implementations store the comment, call the model, sanitise the result,
/// attach it to the comment and resolve the recommended strategies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyzeCommentCommand: Send + Sync {
    /// Analyse and persist one comment.
    async fn analyze(&self, request: AnalyzeCommentRequest)
    -> Result<AnalyzeCommentResponse, Error>;
}
