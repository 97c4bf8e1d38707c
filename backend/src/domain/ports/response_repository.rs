//! Port for generated-response persistence.

use async_trait::async_trait;

use crate::domain::{CommentId, Error, GeneratedResponse, NewGeneratedResponse};

use super::define_port_error;

define_port_error! {
    /// Errors raised by response repository adapters.
    pub enum ResponseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "response repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "response repository query failed: {message}",
    }
}

impl From<ResponseRepositoryError> for Error {
    fn from(value: ResponseRepositoryError) -> Self {
        match value {
            ResponseRepositoryError::Connection { message } => {
                Self::service_unavailable(format!("response repository unavailable: {message}"))
            }
            ResponseRepositoryError::Query { message } => {
                Self::internal(format!("response repository error: {message}"))
            }
        }
    }
}

/// Port for storing generated replies.
///
/// Responses are append-only. The referenced comment and strategy must exist;
/// relational adapters enforce this with foreign keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Insert a reply and return it with its assigned id and timestamp.
    async fn create(
        &self,
        response: NewGeneratedResponse,
    ) -> Result<GeneratedResponse, ResponseRepositoryError>;

    /// Replies generated for `comment_id`, oldest first.
    async fn list_by_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<Vec<GeneratedResponse>, ResponseRepositoryError>;
}
