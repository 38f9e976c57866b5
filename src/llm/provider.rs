//! Provider-agnostic completion types and trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Message role at the wire level.
///
/// `System` carries the persona preamble only; transcript turns are always
/// `User` or `Assistant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A text completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Ordered messages: persona preamble, window turns, then new input.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Optional output cap.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new completion request.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max token count.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A completion response.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text, returned verbatim to the caller.
    pub content: String,
    /// Prompt token count, when the provider reports usage.
    pub input_tokens: Option<u64>,
    /// Completion token count, when the provider reports usage.
    pub output_tokens: Option<u64>,
}

/// Trait for text-generation providers.
///
/// One synchronous-feeling call per user submission. Failures propagate to
/// the caller untouched; retry policy is deliberately absent.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given request.
    async fn complete(&self, req: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// The model identifier this provider sends.
    fn model_name(&self) -> &str;
}
