//! Comment analysis service.
//!
//! Implements [`AnalyzeCommentCommand`]: the comment is stored first, then the
//! model output is sanitised and attached to it. A failed model call leaves the
//! stored comment without analysis.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::ports::{
    AnalyzeCommentCommand, AnalyzeCommentRequest, AnalyzeCommentResponse, CommentRepository,
    CompletionRequest, LanguageModel, LanguageModelError, StrategyRepository,
};
use crate::domain::prompts::analysis_prompt;
use crate::domain::{Error, NewComment, sanitize_analysis};

const FAILURE_CONTEXT: &str = "Failed to analyze comment";

/// Analysis service implementing the driving port.
///
/// Generic over its ports so tests can pass mocks and the server can pass
/// trait objects.
pub struct AnalysisService<C: ?Sized, S: ?Sized, L: ?Sized> {
    comments: Arc<C>,
    strategies: Arc<S>,
    model: Arc<L>,
}

impl<C: ?Sized, S: ?Sized, L: ?Sized> AnalysisService<C, S, L> {
    /// Create a new service over the given ports.
    pub fn new(comments: Arc<C>, strategies: Arc<S>, model: Arc<L>) -> Self {
        Self {
            comments,
            strategies,
            model,
        }
    }
}

/// Parse raw model output; an empty completion counts as `{}`.
fn parse_model_output(raw: &str) -> Result<Value, LanguageModelError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw).map_err(|err| LanguageModelError::decode(err.to_string()))
}

impl<C, S, L> AnalysisService<C, S, L>
where
    C: CommentRepository + ?Sized,
    S: StrategyRepository + ?Sized,
    L: LanguageModel + ?Sized,
{
    async fn run(&self, request: AnalyzeCommentRequest) -> Result<AnalyzeCommentResponse, Error> {
        let AnalyzeCommentRequest {
            content,
            parameters,
            context,
        } = request;
        let prompt = analysis_prompt(content.as_str(), parameters.as_ref(), context.as_ref());

        let comment = self.comments.create(NewComment::anonymous(content)).await?;
        debug!(comment_id = %comment.id, "stored comment for analysis");

        let raw = self
            .model
            .complete(&CompletionRequest::analysis(prompt))
            .await?;
        let analysis = sanitize_analysis(&parse_model_output(&raw)?);

        let comment = self
            .comments
            .update_analysis(comment.id, &analysis)
            .await?;
        let recommended_strategies = self
            .strategies
            .find_by_ids(&analysis.recommended_strategies)
            .await?;

        info!(
            comment_id = %comment.id,
            risk_level = %analysis.risk_level,
            "comment analysed"
        );
        Ok(AnalyzeCommentResponse {
            comment,
            analysis,
            recommended_strategies,
        })
    }
}

#[async_trait]
impl<C, S, L> AnalyzeCommentCommand for AnalysisService<C, S, L>
where
    C: CommentRepository + ?Sized,
    S: StrategyRepository + ?Sized,
    L: LanguageModel + ?Sized,
{
    async fn analyze(
        &self,
        request: AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, Error> {
        self.run(request)
            .await
            .map_err(|err| err.in_context(FAILURE_CONTEXT))
    }
}

#[cfg(test)]
#[path = "analysis_service_tests.rs"]
mod tests;
