//! Tests for the reply generation service.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::domain::ports::{
    FixtureStrategyRepository, LanguageModelError, MockCommentRepository, MockLanguageModel,
    MockResponseRepository,
};
use crate::domain::{
    CommentContent, ContextInfo, DesiredReaction, ErrorCode, Relationship, ResponseId,
};

type Service = ResponseService<
    MockCommentRepository,
    FixtureStrategyRepository,
    MockResponseRepository,
    MockLanguageModel,
>;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn comment(id: i32, content: &str) -> Comment {
    Comment {
        id: CommentId::new(id),
        content: content.to_owned(),
        user_id: None,
        analysis_result: None,
        created_at: at(),
        updated_at: at(),
    }
}

fn saved(new: NewGeneratedResponse) -> GeneratedResponse {
    GeneratedResponse {
        id: ResponseId::new(1),
        comment_id: new.comment_id,
        strategy_id: new.strategy_id,
        generated_text: new.generated_text,
        context: new.context,
        created_at: at(),
    }
}

fn repo_with_comment(id: i32) -> MockCommentRepository {
    let mut repo = MockCommentRepository::new();
    repo.expect_find_by_id()
        .returning(move |requested| {
            Ok((requested == CommentId::new(id)).then(|| comment(id, "Du bist nutzlos")))
        });
    repo
}

fn model_replying(text: &'static str) -> MockLanguageModel {
    let mut model = MockLanguageModel::new();
    model
        .expect_complete()
        .times(1)
        .withf(|request| !request.json_output && request.max_tokens == Some(200))
        .return_once(move |_| Ok(text.to_owned()));
    model
}

fn silent_model() -> MockLanguageModel {
    let mut model = MockLanguageModel::new();
    model.expect_complete().never();
    model
}

fn make_service(
    comments: MockCommentRepository,
    responses: MockResponseRepository,
    model: MockLanguageModel,
) -> Service {
    ResponseService::new(
        Arc::new(comments),
        Arc::new(FixtureStrategyRepository),
        Arc::new(responses),
        Arc::new(model),
    )
}

fn request(target: CommentTarget, strategy: i32) -> GenerateResponseRequest {
    GenerateResponseRequest {
        target,
        strategy_id: StrategyId::new(strategy),
        context: None,
    }
}

#[tokio::test]
async fn stored_comment_reply_references_request_ids() {
    let mut responses = MockResponseRepository::new();
    responses.expect_create().times(1).return_once(|new| Ok(saved(new)));
    let service = make_service(
        repo_with_comment(1),
        responses,
        model_replying("  Lass uns sachlich bleiben.  "),
    );

    let outcome = service
        .generate(request(CommentTarget::Stored(CommentId::new(1)), 1))
        .await
        .expect("generation succeeds");

    assert_eq!(outcome.response.comment_id, CommentId::new(1));
    assert_eq!(outcome.response.strategy_id, StrategyId::new(1));
    assert_eq!(outcome.response.generated_text, "Lass uns sachlich bleiben.");
    assert_eq!(outcome.strategy.name, "Deeskalation");
}

#[tokio::test]
async fn empty_reply_uses_fallback_text() {
    let mut responses = MockResponseRepository::new();
    responses.expect_create().times(1).return_once(|new| Ok(saved(new)));
    let service = make_service(repo_with_comment(1), responses, model_replying("\n "));

    let outcome = service
        .generate(request(CommentTarget::Stored(CommentId::new(1)), 2))
        .await
        .expect("generation succeeds");

    assert_eq!(outcome.response.generated_text, RESPONSE_FALLBACK_TEXT);
}

#[tokio::test]
async fn inline_comment_is_stored_before_generating() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_create()
        .times(1)
        .withf(|new| new.content.as_str() == "Verschwinde!" && new.user_id.is_none())
        .return_once(|new| Ok(comment(7, new.content.as_str())));
    let mut responses = MockResponseRepository::new();
    responses.expect_create().times(1).return_once(|new| Ok(saved(new)));
    let service = make_service(comments, responses, model_replying("Ok."));

    let content = CommentContent::new("Verschwinde!").expect("non-blank");
    let outcome = service
        .generate(request(CommentTarget::Inline(content), 3))
        .await
        .expect("generation succeeds");

    assert_eq!(outcome.response.comment_id, CommentId::new(7));
}

#[tokio::test]
async fn context_is_persisted_with_the_reply() {
    let context = ContextInfo {
        relationship: Relationship::Colleague,
        desired_reaction: DesiredReaction::Deescalate,
        additional_info: None,
        platform: Some("Slack".to_owned()),
    };
    let expected = context.clone();
    let mut responses = MockResponseRepository::new();
    responses
        .expect_create()
        .times(1)
        .withf(move |new| new.context.as_ref() == Some(&expected))
        .return_once(|new| Ok(saved(new)));
    let service = make_service(repo_with_comment(1), responses, model_replying("Danke."));

    let outcome = service
        .generate(GenerateResponseRequest {
            target: CommentTarget::Stored(CommentId::new(1)),
            strategy_id: StrategyId::new(8),
            context: Some(context),
        })
        .await
        .expect("generation succeeds");

    assert!(outcome.response.context.is_some());
}

#[tokio::test]
async fn unknown_comment_is_not_found() {
    let mut responses = MockResponseRepository::new();
    responses.expect_create().never();
    let service = make_service(repo_with_comment(1), responses, silent_model());

    let error = service
        .generate(request(CommentTarget::Stored(CommentId::new(99)), 1))
        .await
        .expect_err("missing comment");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Comment not found");
}

#[tokio::test]
async fn unknown_strategy_is_not_found_and_inline_text_is_not_stored() {
    let mut comments = MockCommentRepository::new();
    comments.expect_create().never();
    let service = make_service(comments, MockResponseRepository::new(), silent_model());

    let content = CommentContent::new("Hallo").expect("non-blank");
    let error = service
        .generate(request(CommentTarget::Inline(content), 42))
        .await
        .expect_err("missing strategy");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Strategy not found");
}

#[tokio::test]
async fn model_failure_is_wrapped() {
    let mut model = MockLanguageModel::new();
    model
        .expect_complete()
        .times(1)
        .return_once(|_| Err(LanguageModelError::timeout("after 60s")));
    let service = make_service(repo_with_comment(1), MockResponseRepository::new(), model);

    let error = service
        .generate(request(CommentTarget::Stored(CommentId::new(1)), 1))
        .await
        .expect_err("model fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(
        error.message(),
        "Failed to generate response: language model request timed out: after 60s"
    );
}

#[tokio::test]
async fn listing_replies_requires_known_comment() {
    let mut responses = MockResponseRepository::new();
    responses.expect_list_by_comment().never();
    let service = make_service(repo_with_comment(1), responses, silent_model());

    let error = service
        .list_responses(CommentId::new(5))
        .await
        .expect_err("missing comment");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn listing_replies_returns_repository_rows() {
    let mut responses = MockResponseRepository::new();
    responses
        .expect_list_by_comment()
        .times(1)
        .return_once(|comment_id| {
            Ok(vec![saved(NewGeneratedResponse {
                comment_id,
                strategy_id: StrategyId::new(4),
                generated_text: "Dokumentiert.".to_owned(),
                context: None,
            })])
        });
    let service = make_service(repo_with_comment(1), responses, silent_model());

    let replies = service
        .list_responses(CommentId::new(1))
        .await
        .expect("listing succeeds");

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].strategy_id, StrategyId::new(4));
}
