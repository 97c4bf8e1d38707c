//! PostgreSQL-backed `ResponseRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;

use crate::domain::ports::{ResponseRepository, ResponseRepositoryError};
use crate::domain::{
    CommentId, ContextInfo, GeneratedResponse, NewGeneratedResponse, ResponseId, StrategyId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewResponseRow, ResponseRow};
use super::pool::{DbPool, PoolError};
use super::schema::responses;

/// Diesel implementation of [`ResponseRepository`].
///
/// Foreign keys on `comment_id` and `strategy_id` reject dangling references.
#[derive(Clone)]
pub struct DieselResponseRepository {
    pool: DbPool,
}

impl DieselResponseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ResponseRepositoryError {
    map_pool_error(error, ResponseRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ResponseRepositoryError {
    map_diesel_error(
        error,
        ResponseRepositoryError::query,
        ResponseRepositoryError::connection,
    )
}

fn context_to_json(context: Option<&ContextInfo>) -> Result<Option<Value>, ResponseRepositoryError> {
    context
        .map(serde_json::to_value)
        .transpose()
        .map_err(|err| ResponseRepositoryError::query(format!("failed to serialise context: {err}")))
}

fn row_to_response(row: ResponseRow) -> Result<GeneratedResponse, ResponseRepositoryError> {
    let context = row
        .context
        .map(serde_json::from_value::<ContextInfo>)
        .transpose()
        .map_err(|err| {
            ResponseRepositoryError::query(format!(
                "response {} has malformed context: {err}",
                row.id
            ))
        })?;

    Ok(GeneratedResponse {
        id: ResponseId::new(row.id),
        comment_id: CommentId::new(row.comment_id),
        strategy_id: StrategyId::new(row.strategy_id),
        generated_text: row.generated_text,
        context,
        created_at: row.created_at,
    })
}

#[async_trait]
impl ResponseRepository for DieselResponseRepository {
    async fn create(
        &self,
        response: NewGeneratedResponse,
    ) -> Result<GeneratedResponse, ResponseRepositoryError> {
        let row = NewResponseRow {
            comment_id: response.comment_id.value(),
            strategy_id: response.strategy_id.value(),
            generated_text: response.generated_text.as_str(),
            context: context_to_json(response.context.as_ref())?,
        };
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let stored: ResponseRow = diesel::insert_into(responses::table)
            .values(&row)
            .returning(ResponseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        row_to_response(stored)
    }

    async fn list_by_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<Vec<GeneratedResponse>, ResponseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<ResponseRow> = responses::table
            .filter(responses::comment_id.eq(comment_id.value()))
            .order(responses::id.asc())
            .select(ResponseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_response).collect()
    }
}
