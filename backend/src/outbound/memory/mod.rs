//! Process-local store used when no database is configured.
//!
//! [`MemoryStore`] implements every repository port over plain maps behind a
//! single mutex. Identifiers increment from 1, mirroring a serial column.
//! Guards never live across an `.await`; every method locks, copies what it
//! needs and releases before returning.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, ResponseRepository, ResponseRepositoryError,
    StrategyRepository, StrategyRepositoryError,
};
use crate::domain::{
    AnalysisResult, Comment, CommentId, GeneratedResponse, NewComment, NewGeneratedResponse,
    ResponseId, Strategy, StrategyId, predefined_strategies,
};

const POISONED: &str = "memory store lock poisoned";
const IDS_EXHAUSTED: &str = "memory store identifier space exhausted";

/// Hand out `next` and advance it, refusing to wrap past `i32::MAX`.
fn take_id(next: &mut i32) -> Option<i32> {
    let id = *next;
    *next = id.checked_add(1)?;
    Some(id)
}

struct Tables {
    comments: HashMap<i32, Comment>,
    strategies: HashMap<i32, Strategy>,
    responses: HashMap<i32, GeneratedResponse>,
    next_comment_id: i32,
    next_response_id: i32,
}

impl Tables {
    fn seeded() -> Self {
        Self {
            comments: HashMap::new(),
            strategies: predefined_strategies()
                .into_iter()
                .map(|strategy| (strategy.id.value(), strategy))
                .collect(),
            responses: HashMap::new(),
            next_comment_id: 1,
            next_response_id: 1,
        }
    }
}

/// In-memory implementation of the comment, strategy and response ports.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Empty store seeded with the strategy catalogue, timestamped by `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Mutex::new(Tables::seeded()),
            clock,
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, Tables>> {
        self.tables.lock().ok()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError> {
        let now = self.clock.utc();
        let mut tables = self
            .lock()
            .ok_or_else(|| CommentRepositoryError::query(POISONED))?;
        let id = take_id(&mut tables.next_comment_id)
            .ok_or_else(|| CommentRepositoryError::query(IDS_EXHAUSTED))?;
        let stored = Comment {
            id: CommentId::new(id),
            content: comment.content.into_inner(),
            user_id: comment.user_id,
            analysis_result: None,
            created_at: now,
            updated_at: now,
        };
        tables.comments.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| CommentRepositoryError::query(POISONED))?;
        Ok(tables.comments.get(&id.value()).cloned())
    }

    async fn update_analysis(
        &self,
        id: CommentId,
        analysis: &AnalysisResult,
    ) -> Result<Comment, CommentRepositoryError> {
        let now = self.clock.utc();
        let mut tables = self
            .lock()
            .ok_or_else(|| CommentRepositoryError::query(POISONED))?;
        let comment = tables
            .comments
            .get_mut(&id.value())
            .ok_or_else(|| CommentRepositoryError::not_found(id.value()))?;
        comment.analysis_result = Some(analysis.clone());
        comment.updated_at = now;
        Ok(comment.clone())
    }
}

#[async_trait]
impl StrategyRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| StrategyRepositoryError::query(POISONED))?;
        let mut strategies: Vec<Strategy> = tables.strategies.values().cloned().collect();
        strategies.sort_by_key(|strategy| strategy.id);
        Ok(strategies)
    }

    async fn find_by_id(
        &self,
        id: StrategyId,
    ) -> Result<Option<Strategy>, StrategyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| StrategyRepositoryError::query(POISONED))?;
        Ok(tables.strategies.get(&id.value()).cloned())
    }

    async fn find_by_ids(
        &self,
        ids: &[StrategyId],
    ) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| StrategyRepositoryError::query(POISONED))?;
        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| tables.strategies.get(&id.value()).cloned())
            .collect())
    }
}

#[async_trait]
impl ResponseRepository for MemoryStore {
    async fn create(
        &self,
        response: NewGeneratedResponse,
    ) -> Result<GeneratedResponse, ResponseRepositoryError> {
        let now = self.clock.utc();
        let mut tables = self
            .lock()
            .ok_or_else(|| ResponseRepositoryError::query(POISONED))?;
        if !tables.comments.contains_key(&response.comment_id.value()) {
            return Err(ResponseRepositoryError::query(format!(
                "comment {} does not exist",
                response.comment_id
            )));
        }
        if !tables.strategies.contains_key(&response.strategy_id.value()) {
            return Err(ResponseRepositoryError::query(format!(
                "strategy {} does not exist",
                response.strategy_id.value()
            )));
        }
        let id = take_id(&mut tables.next_response_id)
            .ok_or_else(|| ResponseRepositoryError::query(IDS_EXHAUSTED))?;
        let stored = GeneratedResponse {
            id: ResponseId::new(id),
            comment_id: response.comment_id,
            strategy_id: response.strategy_id,
            generated_text: response.generated_text,
            context: response.context,
            created_at: now,
        };
        tables.responses.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_by_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<Vec<GeneratedResponse>, ResponseRepositoryError> {
        let tables = self
            .lock()
            .ok_or_else(|| ResponseRepositoryError::query(POISONED))?;
        let mut responses: Vec<GeneratedResponse> = tables
            .responses
            .values()
            .filter(|response| response.comment_id == comment_id)
            .cloned()
            .collect();
        responses.sort_by_key(|response| response.id);
        Ok(responses)
    }
}
