//! Wire types for the `/chat/completions` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::ports::CompletionRequest;

#[derive(Debug, Serialize)]
pub(super) struct MessageDto<'a> {
    pub(super) role: &'static str,
    pub(super) content: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct ResponseFormatDto {
    #[serde(rename = "type")]
    pub(super) format_type: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: [MessageDto<'a>; 2],
    pub(super) temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) response_format: Option<ResponseFormatDto>,
}

impl<'a> ChatCompletionRequestDto<'a> {
    pub(super) fn new(model: &'a str, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            messages: [
                MessageDto {
                    role: "system",
                    content: request.prompt.system.as_str(),
                },
                MessageDto {
                    role: "user",
                    content: request.prompt.user.as_str(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then_some(ResponseFormatDto {
                format_type: "json_object",
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceDto {
    pub(super) message: ChoiceMessageDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceMessageDto {
    #[serde(default)]
    pub(super) content: Option<String>,
}

impl ChatCompletionResponseDto {
    /// Content of the first choice; empty when absent.
    pub(super) fn into_first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}
