//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, plus the services that drive the model calls. Keep
//! types free of transport concerns and document serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error: API error response payload.
//! - Comment, Strategy, GeneratedResponse: stored records.
//! - AnalysisResult and [`sanitize_analysis`]: clamped model output.
//! - AnalysisService, ResponseService: driving port implementations.

pub mod analysis;
pub mod analysis_service;
pub mod comment;
pub mod context;
pub mod error;
pub mod level;
pub mod ports;
pub mod prompts;
pub mod response;
pub mod response_service;
pub mod strategy;
pub mod trace_id;

pub use self::analysis::{
    AnalysisCategories, AnalysisResult, CommunicationProfile, CyberbullyingIndicators,
    LinguisticScores, MAX_PERCENTAGE, MAX_RISK_SCORE, sanitize_analysis,
};
pub use self::analysis_service::AnalysisService;
pub use self::comment::{Comment, CommentContent, CommentId, CommentValidationError, NewComment};
pub use self::context::{
    AnalysisParameters, ContextInfo, DesiredReaction, HarmCategory, Relationship, Setting,
    SeverityLevel,
};
pub use self::error::{Error, ErrorCode};
pub use self::level::{Level, ParseLevelError};
pub use self::response::{GeneratedResponse, NewGeneratedResponse, ResponseId};
pub use self::response_service::ResponseService;
pub use self::strategy::{
    ParseStrategyCategoryError, Strategy, StrategyCategory, StrategyId, predefined_strategies,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
