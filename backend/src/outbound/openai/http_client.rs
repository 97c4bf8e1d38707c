//! Reqwest-backed chat-completion adapter.
//!
//! Owns transport details only: request serialisation, bearer auth, timeout
//! and HTTP error mapping, and decoding of the first choice's content.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::dto::{ChatCompletionRequestDto, ChatCompletionResponseDto};
use crate::domain::ports::{CompletionRequest, LanguageModel, LanguageModelError};

/// Connection settings for an OpenAI-compatible provider.
pub struct OpenAiSettings {
    /// API root such as `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    pub api_key: Zeroizing<String>,
    pub timeout: Duration,
}

/// Failures while constructing [`OpenAiChatModel`].
#[derive(Debug, thiserror::Error)]
pub enum OpenAiSetupError {
    /// The base URL does not parse.
    #[error("invalid language model base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// [`LanguageModel`] adapter for `POST {base_url}/chat/completions`.
pub struct OpenAiChatModel {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: Zeroizing<String>,
}

impl OpenAiChatModel {
    /// Build an adapter with a reqwest client bounded by `settings.timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiSetupError`] when the base URL is invalid or the client
    /// cannot be constructed.
    pub fn new(settings: OpenAiSettings) -> Result<Self, OpenAiSetupError> {
        let endpoint = completions_endpoint(&settings.base_url)?;
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            model: settings.model,
            api_key: settings.api_key,
        })
    }
}

fn completions_endpoint(base_url: &str) -> Result<Url, OpenAiSetupError> {
    let raw = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| OpenAiSetupError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

#[async_trait]
impl LanguageModel for OpenAiChatModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LanguageModelError> {
        let payload = ChatCompletionRequestDto::new(&self.model, request);
        debug!(
            model = %self.model,
            temperature = request.temperature,
            max_tokens = ?request.max_tokens,
            json_output = request.json_output,
            prompt_len = request.prompt.system.len() + request.prompt.user.len(),
            "sending chat completion request"
        );
        let started = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(status = status.as_u16(), %error, "chat completion rejected");
            return Err(error);
        }

        let content = parse_completion(body.as_ref())?;
        debug!(
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            content_len = content.len(),
            "chat completion received"
        );
        Ok(content)
    }
}

fn parse_completion(body: &[u8]) -> Result<String, LanguageModelError> {
    let decoded: ChatCompletionResponseDto = serde_json::from_slice(body).map_err(|error| {
        LanguageModelError::decode(format!("invalid chat completion payload: {error}"))
    })?;
    Ok(decoded.into_first_content())
}

fn map_transport_error(error: reqwest::Error) -> LanguageModelError {
    if error.is_timeout() {
        LanguageModelError::timeout(error.to_string())
    } else {
        LanguageModelError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> LanguageModelError {
    LanguageModelError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network helpers.

    use super::*;
    use crate::domain::prompts::Prompt;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn prompt() -> Prompt {
        Prompt {
            system: "Du bist ein Assistent.".to_owned(),
            user: "Kommentar: hallo".to_owned(),
        }
    }

    #[rstest]
    #[case("https://api.openai.com/v1", "https://api.openai.com/v1/chat/completions")]
    #[case("http://localhost:11434/v1/", "http://localhost:11434/v1/chat/completions")]
    fn endpoint_appends_completions_path(#[case] base: &str, #[case] expected: &str) {
        let endpoint = completions_endpoint(base).expect("valid base url");
        assert_eq!(endpoint.as_str(), expected);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let error = completions_endpoint("not a url").expect_err("invalid url");
        assert!(matches!(error, OpenAiSetupError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn analysis_payload_requests_json_object() {
        let request = CompletionRequest::analysis(prompt());
        let payload = serde_json::to_value(ChatCompletionRequestDto::new("gpt-4o", &request))
            .expect("payload serialises");

        assert_eq!(payload["model"], json!("gpt-4o"));
        assert_eq!(payload["messages"][0]["role"], json!("system"));
        assert_eq!(payload["messages"][1]["content"], json!("Kommentar: hallo"));
        assert_eq!(payload["response_format"], json!({"type": "json_object"}));
        assert!(payload.get("max_tokens").is_none());
    }

    #[test]
    fn reply_payload_limits_tokens_without_json_mode() {
        let request = CompletionRequest::reply(prompt());
        let payload = serde_json::to_value(ChatCompletionRequestDto::new("gpt-4o", &request))
            .expect("payload serialises");

        assert_eq!(payload["max_tokens"], json!(200));
        assert!(payload.get("response_format").is_none());
        let temperature = payload["temperature"].as_f64().expect("number");
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[rstest]
    #[case(json!({"choices": [{"message": {"content": "{\"riskScore\": 3}"}}]}), "{\"riskScore\": 3}")]
    #[case(json!({"choices": [{"message": {"content": null}}]}), "")]
    #[case(json!({"choices": []}), "")]
    #[case(json!({"id": "chatcmpl-1"}), "")]
    fn first_choice_content_is_extracted(#[case] body: Value, #[case] expected: &str) {
        let bytes = serde_json::to_vec(&body).expect("body serialises");
        assert_eq!(parse_completion(&bytes).expect("decodes"), expected);
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let error = parse_completion(b"<html>bad gateway</html>").expect_err("not json");
        assert!(matches!(error, LanguageModelError::Decode { .. }));
    }

    #[test]
    fn status_errors_carry_code_and_preview() {
        let error = map_status_error(
            StatusCode::UNAUTHORIZED,
            b"{\n  \"error\": {\"message\": \"Incorrect API key\"}\n}",
        );
        assert_eq!(
            error,
            LanguageModelError::status(401_u16, "{ \"error\": {\"message\": \"Incorrect API key\"} }")
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
