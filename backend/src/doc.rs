//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. Swagger UI serves the document in debug
//! builds.

use crate::inbound::http::analyze::{AnalysisMode, AnalyzeRequest};
use crate::inbound::http::generate_response::GenerateRequest;
use crate::inbound::http::schemas::{
    AnalysisResultSchema, AnalyzeCommentResponseSchema, CommentSchema, ErrorCodeSchema,
    ErrorSchema, GenerateResponseResponseSchema, GeneratedResponseSchema, HistoryStatsSchema,
    StrategySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CommentGuard API",
        description = "Analyse hostile comments with a language model and draft replies."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::analyze::analyze_comment,
        crate::inbound::http::generate_response::generate_response,
        crate::inbound::http::strategies::list_strategies,
        crate::inbound::http::strategies::get_strategy,
        crate::inbound::http::comments::list_comment_responses,
        crate::inbound::http::history::get_history,
        crate::inbound::http::history::get_history_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AnalyzeRequest,
        AnalysisMode,
        GenerateRequest,
        AnalyzeCommentResponseSchema,
        GenerateResponseResponseSchema,
        AnalysisResultSchema,
        CommentSchema,
        GeneratedResponseSchema,
        StrategySchema,
        HistoryStatsSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "analysis", description = "Comment analysis"),
        (name = "responses", description = "Reply generation and listing"),
        (name = "strategies", description = "Response strategy catalogue"),
        (name = "history", description = "Analysis history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
