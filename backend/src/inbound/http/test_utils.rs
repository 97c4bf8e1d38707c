//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    MockAnalyzeCommentCommand, MockCommentResponsesQuery, MockGenerateResponseCommand,
    MockStrategyRepository,
};
use crate::domain::{Comment, CommentId, Strategy, StrategyId, predefined_strategies};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked ports; tests set expectations on the ones they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub analyze: MockAnalyzeCommentCommand,
    pub generate: MockGenerateResponseCommand,
    pub strategies: MockStrategyRepository,
    pub comment_responses: MockCommentResponsesQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            analyze: Arc::new(self.analyze),
            generate: Arc::new(self.generate),
            strategies: Arc::new(self.strategies),
            comment_responses: Arc::new(self.comment_responses),
        }))
    }
}

/// Catalogue entry with the given id.
pub fn strategy(id: i32) -> Strategy {
    predefined_strategies()
        .into_iter()
        .find(|candidate| candidate.id == StrategyId::new(id))
        .expect("catalogue entry exists")
}

/// Stored comment without analysis.
pub fn comment(id: i32, content: &str) -> Comment {
    Comment {
        id: CommentId::new(id),
        content: content.to_owned(),
        user_id: None,
        analysis_result: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}
