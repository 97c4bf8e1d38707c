//! Comment analysis HTTP handler.
//!
//! ```text
//! POST /api/analyze
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::{AnalyzeCommentRequest, AnalyzeCommentResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AnalyzeCommentResponseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_comment, parse_context, parse_parameters};

/// How the client intends to use the analysis. The backend treats both
/// modes identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Manual,
    Autopilot,
}

/// Request payload for analysing a comment.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Comment text; required and non-blank.
    #[schema(value_type = Option<String>)]
    pub comment: Option<Value>,
    pub mode: Option<AnalysisMode>,
    /// `{severityLevels, categories, context}` for manual mode.
    #[schema(value_type = Option<Object>)]
    pub parameters: Option<Value>,
    /// `{relationship, desiredReaction, additionalInfo?, platform?}`.
    #[schema(value_type = Option<Object>)]
    pub context: Option<Value>,
}

fn parse_analyze_request(payload: AnalyzeRequest) -> Result<AnalyzeCommentRequest, Error> {
    let content = parse_comment(payload.comment)?;
    let parameters = parse_parameters(payload.parameters)?;
    let context = parse_context(payload.context)?;
    if let Some(mode) = payload.mode {
        debug!(?mode, "analysis mode requested");
    }
    Ok(AnalyzeCommentRequest {
        content,
        parameters,
        context,
    })
}

/// Analyse a comment with the language model and store the result.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Stored comment with analysis", body = AnalyzeCommentResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Analysis failed", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["analysis"],
    operation_id = "analyzeComment"
)]
#[post("/analyze")]
pub async fn analyze_comment(
    state: web::Data<HttpState>,
    payload: web::Json<AnalyzeRequest>,
) -> ApiResult<web::Json<AnalyzeCommentResponse>> {
    let request = parse_analyze_request(payload.into_inner())?;
    let response = state.analyze.analyze(request).await?;
    Ok(web::Json(response))
}
