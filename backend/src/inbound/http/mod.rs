//! HTTP inbound adapter exposing REST endpoints.

pub mod analyze;
pub mod comments;
pub mod error;
pub mod generate_response;
pub mod health;
pub mod history;
pub mod schemas;
pub mod state;
pub mod strategies;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Every `/api` endpoint. Callers attach [`state::HttpState`] and
/// [`error::json_config`] as app data.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(analyze::analyze_comment)
        .service(generate_response::generate_response)
        .service(strategies::list_strategies)
        .service(strategies::get_strategy)
        .service(comments::list_comment_responses)
        .service(history::get_history)
        .service(history::get_history_stats)
}
