//! Completion provider integration.
//!
//! The wire format is the OpenAI chat completions API; the rest of the
//! crate only sees the [`CompletionProvider`] trait.

mod openai;
mod provider;

pub use openai::OpenAiProvider;
pub use provider::{
    ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse, Role,
};

use std::sync::Arc;

use crate::config::Config;

/// Create the completion provider for the given configuration.
pub fn create_provider(config: &Config) -> Arc<dyn CompletionProvider> {
    tracing::info!(
        "Using OpenAI-compatible completions at {} (model {})",
        config.base_url,
        config.model
    );
    Arc::new(OpenAiProvider::new(config))
}
