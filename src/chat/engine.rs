//! The chat engine: one user submission, one atomic step.
//!
//! Append the user turn, assemble the prompt, invoke the provider, append
//! the assistant turn and record the exchange. The caller re-renders from
//! the transcript afterwards. There is no retry: a provider failure leaves
//! the user turn in the transcript and surfaces as a failed turn.

use std::sync::Arc;

use crate::chat::memory::Exchange;
use crate::chat::prompt;
use crate::chat::session::Session;
use crate::error::LlmError;
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::persona::Persona;

/// Outcome of processing one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The assistant replied with this text.
    Replied(String),
    /// The input was empty or whitespace-only; nothing happened.
    Ignored,
}

/// Drives persona conversations against a completion provider.
pub struct ChatEngine {
    provider: Arc<dyn CompletionProvider>,
    persona: Persona,
    temperature: f32,
}

impl ChatEngine {
    /// Create an engine for one persona.
    pub fn new(provider: Arc<dyn CompletionProvider>, persona: Persona, temperature: f32) -> Self {
        Self {
            provider,
            persona,
            temperature,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Run one submission against a session.
    ///
    /// The caller holds the session's mutex, which is what serializes
    /// submissions per session.
    pub async fn take_turn(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<TurnOutcome, LlmError> {
        session.touch();

        let input = input.trim();
        if input.is_empty() {
            return Ok(TurnOutcome::Ignored);
        }

        session.transcript.append_user(input);

        let messages = prompt::assemble(&self.persona, &session.memory, input);
        let request = CompletionRequest::new(messages).with_temperature(self.temperature);

        let response = self.provider.complete(request).await?;

        tracing::debug!(
            session_id = %session.id,
            input_tokens = ?response.input_tokens,
            output_tokens = ?response.output_tokens,
            "Completed turn"
        );

        session.transcript.append_assistant(&response.content);
        session.memory.push(Exchange {
            user: input.to_string(),
            assistant: response.content.clone(),
        });

        Ok(TurnOutcome::Replied(response.content))
    }
}
