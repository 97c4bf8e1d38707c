//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod analyze_comment_command;
mod comment_repository;
mod comment_responses_query;
mod generate_response_command;
mod history_query;
mod language_model;
mod response_repository;
mod strategy_repository;

#[cfg(test)]
pub use analyze_comment_command::MockAnalyzeCommentCommand;
pub use analyze_comment_command::{
    AnalyzeCommentCommand, AnalyzeCommentRequest, AnalyzeCommentResponse,
};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use comment_responses_query::MockCommentResponsesQuery;
pub use comment_responses_query::CommentResponsesQuery;
#[cfg(test)]
pub use generate_response_command::MockGenerateResponseCommand;
pub use generate_response_command::{
    CommentTarget, GenerateResponseCommand, GenerateResponseRequest, GenerateResponseResponse,
};
#[cfg(test)]
pub use history_query::MockHistoryQuery;
pub use history_query::{FixtureHistoryQuery, HistoryQuery, HistoryStats};
#[cfg(test)]
pub use language_model::MockLanguageModel;
pub use language_model::{
    CompletionRequest, LanguageModel, LanguageModelError, UnconfiguredLanguageModel,
};
#[cfg(test)]
pub use response_repository::MockResponseRepository;
pub use response_repository::{ResponseRepository, ResponseRepositoryError};
#[cfg(test)]
pub use strategy_repository::MockStrategyRepository;
pub use strategy_repository::{
    FixtureStrategyRepository, StrategyRepository, StrategyRepositoryError,
};
