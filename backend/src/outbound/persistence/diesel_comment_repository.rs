//! PostgreSQL-backed `CommentRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{AnalysisResult, Comment, CommentId, NewComment, sanitize_analysis};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel implementation of [`CommentRepository`].
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CommentRepositoryError {
    map_pool_error(error, CommentRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CommentRepositoryError {
    map_diesel_error(
        error,
        CommentRepositoryError::query,
        CommentRepositoryError::connection,
    )
}

/// Stored analyses pass through the sanitiser again on read.
fn row_to_comment(row: CommentRow) -> Comment {
    Comment {
        id: CommentId::new(row.id),
        content: row.content,
        user_id: row.user_id,
        analysis_result: row.analysis_result.as_ref().map(sanitize_analysis),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewCommentRow {
            content: comment.content.as_str(),
            user_id: comment.user_id.as_deref(),
        };

        diesel::insert_into(comments::table)
            .values(&row)
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_comment)
            .map_err(diesel_error)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<CommentRow> = comments::table
            .find(id.value())
            .select(CommentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_comment))
    }

    async fn update_analysis(
        &self,
        id: CommentId,
        analysis: &AnalysisResult,
    ) -> Result<Comment, CommentRepositoryError> {
        let payload = serde_json::to_value(analysis).map_err(|err| {
            CommentRepositoryError::query(format!("failed to serialise analysis: {err}"))
        })?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<CommentRow> = diesel::update(comments::table.find(id.value()))
            .set((
                comments::analysis_result.eq(Some(payload)),
                comments::updated_at.eq(diesel::dsl::now),
            ))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_comment)
            .ok_or_else(|| CommentRepositoryError::not_found(id.value()))
    }
}
