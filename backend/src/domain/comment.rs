//! Submitted comments and their analysis attachment.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::AnalysisResult;

/// Store-assigned comment identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i32);

impl CommentId {
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

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for comment content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentValidationError {
    /// Content was empty or whitespace only.
    #[error("comment content must not be blank")]
    Blank,
}

/// Non-blank comment text as submitted by the user.
///
/// The text is stored untrimmed so the model sees exactly what was written.
///
/// # Examples
/// ```
/// use commentguard::domain::CommentContent;
///
/// assert!(CommentContent::new("Du bist so dumm").is_ok());
/// assert!(CommentContent::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentContent(String);

impl CommentContent {
    /// Validate and wrap comment text.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CommentValidationError::Blank);
        }
        Ok(Self(value))
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CommentContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A stored comment.
///
/// `analysis_result` stays `None` until the analysis completes; it is the only
/// field that changes after creation. `user_id` is always `None` while
/// authentication is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub user_id: Option<String>,
    pub analysis_result: Option<AnalysisResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: CommentContent,
    pub user_id: Option<String>,
}

impl NewComment {
    /// Anonymous comment with the given content.
    #[must_use]
    pub fn anonymous(content: CommentContent) -> Self {
        Self {
            content,
            user_id: None,
        }
    }
}
