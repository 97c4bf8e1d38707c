//! Comment reply listing.
//!
//! ```text
//! GET /api/comments/{id}/responses
//! ```

use actix_web::{get, web};

use crate::domain::GeneratedResponse;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, GeneratedResponseSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_comment_id;

/// List the replies generated for a comment, oldest first.
#[utoipa::path(
    get,
    path = "/api/comments/{id}/responses",
    params(("id" = String, Path, description = "Numeric comment id")),
    responses(
        (status = 200, description = "Stored replies", body = [GeneratedResponseSchema]),
        (status = 400, description = "Invalid comment ID", body = ErrorSchema),
        (status = 404, description = "Comment not found", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["responses"],
    operation_id = "listCommentResponses"
)]
#[get("/comments/{id}/responses")]
pub async fn list_comment_responses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<GeneratedResponse>>> {
    let comment_id = parse_comment_id(&path.into_inner())?;
    let responses = state.comment_responses.list_responses(comment_id).await?;
    Ok(web::Json(responses))
}
