//! Port for chat-completion calls to a large language model.
//!
//! Adapters own transport details (endpoint, credentials, wire format). The
//! domain only supplies prompts and sampling settings and receives the raw
//! text of the first completion choice.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::prompts::Prompt;

use super::define_port_error;

define_port_error! {
    /// Errors raised by language model adapters.
    pub enum LanguageModelError {
        /// No API key was configured.
        MissingCredentials => "language model API key is not configured",
        /// The request did not complete in time.
        Timeout { message: String } => "language model request timed out: {message}",
        /// The request could not be sent or the body could not be read.
        Transport { message: String } => "language model request failed: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "language model returned status {status}: {message}",
        /// The provider response could not be decoded.
        Decode { message: String } => "language model response was invalid: {message}",
    }
}

impl From<LanguageModelError> for Error {
    fn from(value: LanguageModelError) -> Self {
        Self::internal(value.to_string())
    }
}

/// One chat-completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: Prompt,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Ask the provider to constrain output to a JSON object.
    pub json_output: bool,
}

impl CompletionRequest {
    /// Settings used for comment analysis.
    #[must_use]
    pub fn analysis(prompt: Prompt) -> Self {
        Self {
            prompt,
            temperature: 0.3,
            max_tokens: None,
            json_output: true,
        }
    }

    /// Settings used for reply generation.
    #[must_use]
    pub fn reply(prompt: Prompt) -> Self {
        Self {
            prompt,
            temperature: 0.7,
            max_tokens: Some(200),
            json_output: false,
        }
    }
}

/// Port for chat completions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one completion and return the first choice's content.
    ///
    /// An empty string means the provider returned no content; callers
    /// decide how to treat that.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LanguageModelError>;
}

/// Stand-in used when no API key is configured; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredLanguageModel;

#[async_trait]
impl LanguageModel for UnconfiguredLanguageModel {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LanguageModelError> {
        Err(LanguageModelError::missing_credentials())
    }
}
