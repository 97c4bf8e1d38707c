//! Scenario world driving the `/api` routes over the in-memory store.
//!
//! Each request builds a fresh Actix app on its own system; state survives
//! between steps through the shared [`MemoryStore`].

use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

use commentguard::Trace;
use commentguard::domain::ports::{
    CommentRepository, CompletionRequest, LanguageModel, LanguageModelError, ResponseRepository,
    UnconfiguredLanguageModel,
};
use commentguard::domain::{
    AnalysisService, Comment, CommentContent, CommentId, GeneratedResponse, NewComment,
    ResponseService,
};
use commentguard::inbound::http::api_scope;
use commentguard::inbound::http::error::json_config;
use commentguard::inbound::http::state::{HttpState, HttpStatePorts};
use commentguard::outbound::memory::MemoryStore;

/// Language model returning the same completion for every request.
struct ScriptedModel {
    completion: String,
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LanguageModelError> {
        Ok(self.completion.clone())
    }
}

#[derive(Default, ScenarioState)]
pub(crate) struct HttpWorld {
    store: Slot<Arc<MemoryStore>>,
    completion: Slot<String>,
    pub(crate) last_status: Slot<u16>,
    pub(crate) last_body: Slot<Value>,
}

impl HttpWorld {
    pub(crate) fn start(&self) {
        self.store.set(Arc::new(MemoryStore::default()));
    }

    pub(crate) fn script_completion(&self, completion: impl Into<String>) {
        self.completion.set(completion.into());
    }

    fn store(&self) -> Arc<MemoryStore> {
        self.store.get().expect("backend started")
    }

    fn state(&self) -> web::Data<HttpState> {
        let store = self.store();
        let model: Arc<dyn LanguageModel> = match self.completion.get() {
            Some(completion) => Arc::new(ScriptedModel { completion }),
            None => Arc::new(UnconfiguredLanguageModel),
        };
        let replies = Arc::new(ResponseService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            model.clone(),
        ));
        web::Data::new(HttpState::new(HttpStatePorts {
            analyze: Arc::new(AnalysisService::new(store.clone(), store.clone(), model)),
            generate: replies.clone(),
            strategies: store,
            comment_responses: replies,
        }))
    }

    /// Send one request and record its status and JSON body.
    pub(crate) fn send(&self, request: actix_test::TestRequest) {
        let state = self.state();
        let (status, body) = actix_rt::System::new().block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(state)
                    .app_data(json_config())
                    .wrap(Trace)
                    .service(api_scope()),
            )
            .await;
            let res = actix_test::call_service(&app, request.to_request()).await;
            let status = res.status().as_u16();
            let bytes = actix_test::read_body(res).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, body)
        });
        self.last_status.set(status);
        self.last_body.set(body);
    }

    pub(crate) fn get(&self, path: &str) {
        self.send(actix_test::TestRequest::get().uri(path));
    }

    pub(crate) fn post_json(&self, path: &str, body: &Value) {
        self.send(actix_test::TestRequest::post().uri(path).set_json(body));
    }

    pub(crate) fn status(&self) -> u16 {
        self.last_status.get().expect("a request was sent")
    }

    pub(crate) fn body(&self) -> Value {
        self.last_body.get().expect("a request was sent")
    }

    pub(crate) fn store_comment(&self, text: &str) -> Comment {
        let content = CommentContent::new(text).expect("non-blank comment");
        futures::executor::block_on(CommentRepository::create(
            &*self.store(),
            NewComment::anonymous(content),
        ))
        .expect("comment stored")
    }

    pub(crate) fn stored_comment(&self, id: i32) -> Option<Comment> {
        futures::executor::block_on(CommentRepository::find_by_id(
            &*self.store(),
            CommentId::new(id),
        ))
        .expect("comment lookup")
    }

    pub(crate) fn stored_replies(&self, id: i32) -> Vec<GeneratedResponse> {
        futures::executor::block_on(ResponseRepository::list_by_comment(
            &*self.store(),
            CommentId::new(id),
        ))
        .expect("reply lookup")
    }
}

/// Strip the quotes Gherkin step arguments carry.
pub(crate) fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}
