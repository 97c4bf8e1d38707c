//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

use super::schema::{comments, responses, strategies};

/// Row read from `comments`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i32,
    pub content: String,
    pub user_id: Option<String>,
    pub analysis_result: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable comment; the database assigns id and timestamps.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub content: &'a str,
    pub user_id: Option<&'a str>,
}

/// Row read from `strategies`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = strategies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StrategyRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_level: String,
}

/// Row read from `responses`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = responses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ResponseRow {
    pub id: i32,
    pub comment_id: i32,
    pub strategy_id: i32,
    pub generated_text: String,
    pub context: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Insertable reply; the database assigns id and timestamp.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = responses)]
pub(crate) struct NewResponseRow<'a> {
    pub comment_id: i32,
    pub strategy_id: i32,
    pub generated_text: &'a str,
    pub context: Option<Value>,
}
