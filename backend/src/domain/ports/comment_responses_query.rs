//! Driving port listing the replies generated for a comment.

use async_trait::async_trait;

use crate::domain::{CommentId, Error, GeneratedResponse};

/// Read-side port for a comment's replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentResponsesQuery: Send + Sync {
    /// Replies for `comment_id`, oldest first.
    ///
    /// Fails with `not_found` when the comment does not exist.
    async fn list_responses(&self, comment_id: CommentId) -> Result<Vec<GeneratedResponse>, Error>;
}
