//! Builders wiring repositories and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use commentguard::domain::ports::{
    CommentRepository, LanguageModel, ResponseRepository, StrategyRepository,
};
use commentguard::domain::{AnalysisService, ResponseService};
use commentguard::inbound::http::state::{HttpState, HttpStatePorts};
use commentguard::outbound::memory::MemoryStore;
use commentguard::outbound::persistence::{
    DieselCommentRepository, DieselResponseRepository, DieselStrategyRepository,
};

use super::ServerConfig;

/// Wire both services over one set of repositories.
fn wire_services<C, S, R>(
    comments: Arc<C>,
    strategies: Arc<S>,
    responses: Arc<R>,
    model: Arc<dyn LanguageModel>,
) -> HttpState
where
    C: CommentRepository + 'static,
    S: StrategyRepository + 'static,
    R: ResponseRepository + 'static,
{
    let replies = Arc::new(ResponseService::new(
        comments.clone(),
        strategies.clone(),
        responses,
        model.clone(),
    ));
    HttpState::new(HttpStatePorts {
        analyze: Arc::new(AnalysisService::new(comments, strategies.clone(), model)),
        generate: replies.clone(),
        strategies,
        comment_responses: replies,
    })
}

/// Build HTTP state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let model = config.language_model.clone();
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL storage");
            wire_services(
                Arc::new(DieselCommentRepository::new(pool.clone())),
                Arc::new(DieselStrategyRepository::new(pool.clone())),
                Arc::new(DieselResponseRepository::new(pool.clone())),
                model,
            )
        }
        None => {
            info!("no database configured; using in-memory storage");
            let store = Arc::new(MemoryStore::default());
            wire_services(store.clone(), store.clone(), store, model)
        }
    };
    web::Data::new(state)
}
