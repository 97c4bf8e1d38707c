//! OpenAI-compatible language model adapter.
//!
//! Provides a thin HTTP implementation of the `LanguageModel` port.

mod dto;
mod http_client;

pub use http_client::{OpenAiChatModel, OpenAiSettings, OpenAiSetupError};
