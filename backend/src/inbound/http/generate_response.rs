//! Reply generation HTTP handler.
//!
//! ```text
//! POST /api/generate-response
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::{CommentTarget, GenerateResponseRequest, GenerateResponseResponse};
use crate::domain::{CommentContent, CommentId, Error, StrategyId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, GenerateResponseResponseSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_context;

const TARGET_REQUIRED: &str = "Comment ID or comment and strategy ID are required";

/// Request payload for generating a reply.
///
/// Either `commentId` (a stored comment) or `comment` (inline text, stored
/// on the fly) must be present. `commentId` wins when both are sent.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub comment: Option<String>,
    pub comment_id: Option<i32>,
    pub strategy_id: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub context: Option<Value>,
}

fn parse_generate_request(payload: GenerateRequest) -> Result<GenerateResponseRequest, Error> {
    let strategy_id = payload
        .strategy_id
        .map(StrategyId::new)
        .ok_or_else(|| Error::invalid_request(TARGET_REQUIRED))?;
    let target = match (payload.comment_id, payload.comment) {
        (Some(id), _) => CommentTarget::Stored(CommentId::new(id)),
        (None, Some(text)) => CommentTarget::Inline(
            CommentContent::new(text).map_err(|_| Error::invalid_request(TARGET_REQUIRED))?,
        ),
        (None, None) => return Err(Error::invalid_request(TARGET_REQUIRED)),
    };
    Ok(GenerateResponseRequest {
        target,
        strategy_id,
        context: parse_context(payload.context)?,
    })
}

/// Generate and store a reply for a comment using one strategy.
#[utoipa::path(
    post,
    path = "/api/generate-response",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Stored reply with its strategy", body = GenerateResponseResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Comment or strategy not found", body = ErrorSchema),
        (status = 500, description = "Generation failed", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["responses"],
    operation_id = "generateResponse"
)]
#[post("/generate-response")]
pub async fn generate_response(
    state: web::Data<HttpState>,
    payload: web::Json<GenerateRequest>,
) -> ApiResult<web::Json<GenerateResponseResponse>> {
    let request = parse_generate_request(payload.into_inner())?;
    let response = state.generate.generate(request).await?;
    Ok(web::Json(response))
}
