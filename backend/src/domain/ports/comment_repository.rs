//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{AnalysisResult, Comment, CommentId, Error, NewComment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
        /// The comment to update does not exist.
        NotFound { id: i32 } =>
            "comment {id} not found",
    }
}

impl From<CommentRepositoryError> for Error {
    fn from(value: CommentRepositoryError) -> Self {
        match value {
            CommentRepositoryError::Connection { message } => {
                Self::service_unavailable(format!("comment repository unavailable: {message}"))
            }
            CommentRepositoryError::Query { message } => {
                Self::internal(format!("comment repository error: {message}"))
            }
            CommentRepositoryError::NotFound { .. } => Self::not_found("Comment not found"),
        }
    }
}

/// Port for storing comments and attaching their analysis.
///
/// Identifiers are assigned by the adapter, starting at 1.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment without analysis.
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Look up a comment by id.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Attach the analysis result and bump `updated_at`.
    ///
    /// Returns [`CommentRepositoryError::NotFound`] when no comment has `id`.
    async fn update_analysis(
        &self,
        id: CommentId,
        analysis: &AnalysisResult,
    ) -> Result<Comment, CommentRepositoryError>;
}
