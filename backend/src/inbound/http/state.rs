//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AnalyzeCommentCommand, CommentResponsesQuery, FixtureHistoryQuery, GenerateResponseCommand,
    HistoryQuery, StrategyRepository,
};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub analyze: Arc<dyn AnalyzeCommentCommand>,
    pub generate: Arc<dyn GenerateResponseCommand>,
    pub strategies: Arc<dyn StrategyRepository>,
    pub comment_responses: Arc<dyn CommentResponsesQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub analyze: Arc<dyn AnalyzeCommentCommand>,
    pub generate: Arc<dyn GenerateResponseCommand>,
    pub strategies: Arc<dyn StrategyRepository>,
    pub comment_responses: Arc<dyn CommentResponsesQuery>,
    pub history: Arc<dyn HistoryQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle, serving history from the
    /// placeholder query.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use commentguard::domain::ports::{UnconfiguredLanguageModel, FixtureStrategyRepository};
    /// use commentguard::domain::{AnalysisService, ResponseService};
    /// use commentguard::inbound::http::state::{HttpState, HttpStatePorts};
    /// use commentguard::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::default());
    /// let model = Arc::new(UnconfiguredLanguageModel);
    /// let strategies = Arc::new(FixtureStrategyRepository);
    /// let responses = Arc::new(ResponseService::new(
    ///     store.clone(),
    ///     strategies.clone(),
    ///     store.clone(),
    ///     model.clone(),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     analyze: Arc::new(AnalysisService::new(store.clone(), strategies.clone(), model)),
    ///     generate: responses.clone(),
    ///     strategies,
    ///     comment_responses: responses,
    /// });
    /// let _history = state.history.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            analyze,
            generate,
            strategies,
            comment_responses,
        } = ports;
        Self {
            analyze,
            generate,
            strategies,
            comment_responses,
            history: Arc::new(FixtureHistoryQuery),
        }
    }

    /// Replace the history query.
    #[must_use]
    pub fn with_history(mut self, history: Arc<dyn HistoryQuery>) -> Self {
        self.history = history;
        self
    }
}
