//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing service could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server or in an external call.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Comment is required")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Strategy`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Strategy, rename_all = "camelCase")]
pub struct StrategySchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ignorieren")]
    name: String,
    description: String,
    #[schema(example = "🙈")]
    icon: String,
    /// One of `defensive`, `passive`, `assertive`, `informative`,
    /// `supportive`, `deflective` or `empathetic`.
    #[schema(example = "defensive")]
    category: String,
    pros: Vec<String>,
    cons: Vec<String>,
    /// One of `low`, `medium` or `high`.
    #[schema(example = "low")]
    risk_level: String,
}

/// OpenAPI schema for [`crate::domain::AnalysisResult`].
///
/// Scores are clamped before storage: `riskScore` into `[0, 10]` and the
/// linguistic percentages into `[0, 100]`.
#[derive(ToSchema)]
#[schema(as = crate::domain::AnalysisResult, rename_all = "camelCase")]
pub struct AnalysisResultSchema {
    #[schema(example = 6.5)]
    risk_score: f64,
    #[schema(example = "medium")]
    risk_level: String,
    /// `linguistic`, `cyberbullying` and `communication` groups.
    #[schema(value_type = Object)]
    categories: serde_json::Value,
    recommended_strategies: Vec<i32>,
    /// Optional free-form linguistic breakdown.
    #[schema(value_type = Option<Object>)]
    linguistic_analysis: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Comment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Comment, rename_all = "camelCase")]
pub struct CommentSchema {
    #[schema(example = 1)]
    id: i32,
    content: String,
    /// Always `null` while authentication is disabled.
    user_id: Option<String>,
    analysis_result: Option<AnalysisResultSchema>,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::GeneratedResponse`].
#[derive(ToSchema)]
#[schema(as = crate::domain::GeneratedResponse, rename_all = "camelCase")]
pub struct GeneratedResponseSchema {
    id: i32,
    comment_id: i32,
    strategy_id: i32,
    generated_text: String,
    /// Context the reply was generated with.
    #[schema(value_type = Option<Object>)]
    context: Option<serde_json::Value>,
    #[schema(format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::ports::AnalyzeCommentResponse`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::AnalyzeCommentResponse, rename_all = "camelCase")]
pub struct AnalyzeCommentResponseSchema {
    comment: CommentSchema,
    analysis: AnalysisResultSchema,
    recommended_strategies: Vec<StrategySchema>,
}

/// OpenAPI schema for [`crate::domain::ports::GenerateResponseResponse`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::GenerateResponseResponse)]
pub struct GenerateResponseResponseSchema {
    response: GeneratedResponseSchema,
    strategy: StrategySchema,
}

/// OpenAPI schema for [`crate::domain::ports::HistoryStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::HistoryStats, rename_all = "camelCase")]
pub struct HistoryStatsSchema {
    #[schema(example = 0)]
    total_analyses: u64,
    #[schema(example = 0.0)]
    average_risk_score: f64,
    #[schema(example = 0)]
    high_risk_count: u64,
    #[schema(example = 0)]
    strategies_used: u64,
}
