//! The visible conversation: an append-only, ordered sequence of turns.
//!
//! The transcript is what the UI renders. It is not the model context;
//! that is the job of [`crate::chat::memory::MemoryWindow`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who spoke a transcript turn.
///
/// The persona preamble is wire-level only and never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only turn store for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::new(Speaker::User, text));
    }

    /// Append an assistant turn.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::new(Speaker::Assistant, text));
    }

    /// All turns in creation order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
