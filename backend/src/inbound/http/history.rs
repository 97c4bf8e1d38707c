//! Analysis history endpoints.
//!
//! ```text
//! GET /api/history
//! GET /api/history/stats
//! ```
//!
//! Both are placeholders until per-user history exists; they depend on the
//! `HistoryQuery` port so a real read model can replace the fixture.

use actix_web::{get, web};

use crate::domain::Comment;
use crate::domain::ports::HistoryStats;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CommentSchema, ErrorSchema, HistoryStatsSchema};
use crate::inbound::http::state::HttpState;

/// Previously analysed comments.
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Analysed comments", body = [CommentSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["history"],
    operation_id = "getHistory"
)]
#[get("/history")]
pub async fn get_history(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Comment>>> {
    Ok(web::Json(state.history.history().await?))
}

/// Aggregate analysis statistics.
#[utoipa::path(
    get,
    path = "/api/history/stats",
    responses(
        (status = 200, description = "Aggregate statistics", body = HistoryStatsSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["history"],
    operation_id = "getHistoryStats"
)]
#[get("/history/stats")]
pub async fn get_history_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<HistoryStats>> {
    Ok(web::Json(state.history.stats().await?))
}
