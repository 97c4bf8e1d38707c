//! Reply generation service.
//!
//! Implements [`GenerateResponseCommand`] and [`CommentResponsesQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CommentRepository, CommentResponsesQuery, CommentTarget, CompletionRequest,
    GenerateResponseCommand, GenerateResponseRequest, GenerateResponseResponse, LanguageModel,
    ResponseRepository, StrategyRepository,
};
use crate::domain::prompts::{RESPONSE_FALLBACK_TEXT, response_prompt};
use crate::domain::{
    Comment, CommentId, Error, GeneratedResponse, NewComment, NewGeneratedResponse, Strategy,
    StrategyId,
};

const FAILURE_CONTEXT: &str = "Failed to generate response";

/// Reply service implementing the driving ports.
pub struct ResponseService<C: ?Sized, S: ?Sized, R: ?Sized, L: ?Sized> {
    comments: Arc<C>,
    strategies: Arc<S>,
    responses: Arc<R>,
    model: Arc<L>,
}

impl<C: ?Sized, S: ?Sized, R: ?Sized, L: ?Sized> ResponseService<C, S, R, L> {
    /// Create a new service over the given ports.
    pub fn new(comments: Arc<C>, strategies: Arc<S>, responses: Arc<R>, model: Arc<L>) -> Self {
        Self {
            comments,
            strategies,
            responses,
            model,
        }
    }
}

/// Trim model output, substituting the apology text when nothing is left.
fn reply_text(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        RESPONSE_FALLBACK_TEXT.to_owned()
    } else {
        text.to_owned()
    }
}

impl<C, S, R, L> ResponseService<C, S, R, L>
where
    C: CommentRepository + ?Sized,
    S: StrategyRepository + ?Sized,
    R: ResponseRepository + ?Sized,
    L: LanguageModel + ?Sized,
{
    async fn stored_comment(&self, id: CommentId) -> Result<Comment, Error> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Comment not found"))
    }

    async fn strategy(&self, id: StrategyId) -> Result<Strategy, Error> {
        self.strategies
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Strategy not found"))
    }

    async fn run(
        &self,
        request: GenerateResponseRequest,
    ) -> Result<GenerateResponseResponse, Error> {
        let GenerateResponseRequest {
            target,
            strategy_id,
            context,
        } = request;

        // Inline text is only stored once the strategy is known to exist.
        let (comment, strategy) = match target {
            CommentTarget::Stored(id) => {
                let comment = self.stored_comment(id).await?;
                let strategy = self.strategy(strategy_id).await?;
                (comment, strategy)
            }
            CommentTarget::Inline(content) => {
                let strategy = self.strategy(strategy_id).await?;
                let comment = self.comments.create(NewComment::anonymous(content)).await?;
                (comment, strategy)
            }
        };

        let prompt = response_prompt(&comment.content, &strategy, context.as_ref());
        let raw = self.model.complete(&CompletionRequest::reply(prompt)).await?;

        let response = self
            .responses
            .create(NewGeneratedResponse {
                comment_id: comment.id,
                strategy_id: strategy.id,
                generated_text: reply_text(&raw),
                context,
            })
            .await?;

        info!(
            comment_id = %comment.id,
            strategy_id = strategy.id.value(),
            response_id = response.id.value(),
            "reply generated"
        );
        Ok(GenerateResponseResponse { response, strategy })
    }
}

#[async_trait]
impl<C, S, R, L> GenerateResponseCommand for ResponseService<C, S, R, L>
where
    C: CommentRepository + ?Sized,
    S: StrategyRepository + ?Sized,
    R: ResponseRepository + ?Sized,
    L: LanguageModel + ?Sized,
{
    async fn generate(
        &self,
        request: GenerateResponseRequest,
    ) -> Result<GenerateResponseResponse, Error> {
        self.run(request)
            .await
            .map_err(|err| err.in_context(FAILURE_CONTEXT))
    }
}

#[async_trait]
impl<C, S, R, L> CommentResponsesQuery for ResponseService<C, S, R, L>
where
    C: CommentRepository + ?Sized,
    S: StrategyRepository + ?Sized,
    R: ResponseRepository + ?Sized,
    L: LanguageModel + ?Sized,
{
    async fn list_responses(&self, comment_id: CommentId) -> Result<Vec<GeneratedResponse>, Error> {
        let comment = self.stored_comment(comment_id).await?;
        Ok(self.responses.list_by_comment(comment.id).await?)
    }
}

#[cfg(test)]
#[path = "response_service_tests.rs"]
mod tests;
