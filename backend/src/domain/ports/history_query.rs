//! Driving port for per-user analysis history.
//!
//! History is tied to authenticated users. Authentication is disabled, so the
//! only implementation is [`FixtureHistoryQuery`], which reports an empty
//! history.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Comment, Error};

/// Aggregate figures over a user's history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_analyses: u64,
    pub average_risk_score: f64,
    pub high_risk_count: u64,
    pub strategies_used: u64,
}

/// Read-side port for analysis history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryQuery: Send + Sync {
    /// Analysed comments, newest first.
    async fn history(&self) -> Result<Vec<Comment>, Error>;

    /// Summary statistics over [`HistoryQuery::history`].
    async fn stats(&self) -> Result<HistoryStats, Error>;
}

/// Placeholder history: always empty, all statistics zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHistoryQuery;

#[async_trait]
impl HistoryQuery for FixtureHistoryQuery {
    async fn history(&self) -> Result<Vec<Comment>, Error> {
        Ok(Vec::new())
    }

    async fn stats(&self) -> Result<HistoryStats, Error> {
        Ok(HistoryStats::default())
    }
}
