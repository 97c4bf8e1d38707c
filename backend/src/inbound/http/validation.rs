//! Shared validation helpers for inbound HTTP adapters.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::{
    AnalysisParameters, CommentContent, CommentId, ContextInfo, Error, StrategyId,
};

pub(crate) const COMMENT_REQUIRED: &str = "Comment is required";
pub(crate) const INVALID_PARAMETERS: &str = "Invalid analysis parameters";
pub(crate) const INVALID_CONTEXT: &str = "Invalid context information";
pub(crate) const INVALID_STRATEGY_ID: &str = "Invalid strategy ID";
pub(crate) const INVALID_COMMENT_ID: &str = "Invalid comment ID";

/// Require non-blank comment text. Any JSON value other than a string
/// counts as a missing comment.
pub(crate) fn parse_comment(raw: Option<Value>) -> Result<CommentContent, Error> {
    match raw {
        Some(Value::String(text)) => CommentContent::new(text).ok(),
        _ => None,
    }
    .ok_or_else(|| Error::invalid_request(COMMENT_REQUIRED))
}

fn parse_optional<T: DeserializeOwned>(
    raw: Option<Value>,
    field: &'static str,
    message: &'static str,
) -> Result<Option<T>, Error> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(|err| {
            Error::invalid_request(message).with_details(json!({
                "field": field,
                "reason": err.to_string(),
            }))
        }),
    }
}

/// Decode the manual analysis parameters, if present.
pub(crate) fn parse_parameters(raw: Option<Value>) -> Result<Option<AnalysisParameters>, Error> {
    parse_optional(raw, "parameters", INVALID_PARAMETERS)
}

/// Decode the situational context, if present.
pub(crate) fn parse_context(raw: Option<Value>) -> Result<Option<ContextInfo>, Error> {
    parse_optional(raw, "context", INVALID_CONTEXT)
}

fn parse_i32(raw: &str, message: &'static str) -> Result<i32, Error> {
    raw.trim().parse::<i32>().map_err(|_| {
        Error::invalid_request(message).with_details(json!({ "value": raw }))
    })
}

pub(crate) fn parse_strategy_id(raw: &str) -> Result<StrategyId, Error> {
    parse_i32(raw, INVALID_STRATEGY_ID).map(StrategyId::new)
}

pub(crate) fn parse_comment_id(raw: &str) -> Result<CommentId, Error> {
    parse_i32(raw, INVALID_COMMENT_ID).map(CommentId::new)
}

/// Collect every `id` value from a query string.
///
/// Accepts repeated keys (`?id=1&id=2`) and comma lists (`?id=1,2`); empty
/// segments are ignored.
pub(crate) fn parse_strategy_id_query(query: &str) -> Result<Vec<StrategyId>, Error> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "id")
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .map(|segment| parse_strategy_id(&segment))
        .collect()
}
