//! Request and response DTOs for the web gateway API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{Speaker, Turn};

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Session to speak in; omitted on the very first message.
    pub session_id: Option<Uuid>,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub session_id: Uuid,
    /// "replied", "ignored", or "error".
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TurnInfo {
    pub speaker: &'static str,
    pub text: String,
    pub created_at: String,
}

impl From<&Turn> for TurnInfo {
    fn from(turn: &Turn) -> Self {
        Self {
            speaker: match turn.speaker {
                Speaker::User => "user",
                Speaker::Assistant => "assistant",
            },
            text: turn.text.clone(),
            created_at: turn.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub turns: Vec<TurnInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub persona: &'static str,
}
