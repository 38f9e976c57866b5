//! OpenAI-compatible Chat Completions API provider.
//!
//! Posts to `{base_url}/v1/chat/completions` with bearer auth and returns
//! the first choice's content verbatim. Transport, auth, and quota failures
//! all map to [`LlmError`] variants and are never retried here.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::LlmError;
use crate::llm::provider::{
    ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse, Role,
};

const PROVIDER_NAME: &str = "openai";

/// OpenAI-compatible chat completions provider.
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider from service configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.base_url.clone(), config.api_key.clone(), config.model.clone())
    }

    /// Create a provider against an explicit endpoint (used by tests).
    pub fn with_endpoint(base_url: String, api_key: SecretString, model: String) -> Self {
        // No request timeout: a submission waits as long as the provider takes.
        let client = Client::builder()
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request to the chat completions endpoint.
    async fn send_request<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        body: &T,
    ) -> Result<R, LlmError> {
        let url = self.api_url("chat/completions");

        tracing::debug!("Sending completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {}", e);
                LlmError::RequestFailed {
                    provider: PROVIDER_NAME.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let response_text = response.text().await.unwrap_or_default();

        tracing::debug!("Completion response status: {}", status);

        if !status.is_success() {
            if status.as_u16() == 401 {
                return Err(LlmError::AuthFailed {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            if status.as_u16() == 429 {
                return Err(LlmError::RateLimited {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            return Err(LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("HTTP {}: {}", status, response_text),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("JSON parse error: {}. Raw: {}", e, response_text),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, req: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let messages: Vec<ChatCompletionMessage> =
            req.messages.into_iter().map(|m| m.into()).collect();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        let response: ChatCompletionResponse = self.send_request(&request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: PROVIDER_NAME.to_string(),
                reason: "No choices in response".to_string(),
            })?;

        let content = choice
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: PROVIDER_NAME.to_string(),
                reason: "Choice carried no message content".to_string(),
            })?;

        let usage = response.usage.unwrap_or_default();

        Ok(CompletionResponse {
            content,
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// Chat Completions wire types.

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatCompletionMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl From<ChatMessage> for ChatCompletionMessage {
    fn from(msg: ChatMessage) -> Self {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: Some(msg.content),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    usage: Option<ChatCompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage2>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage2 {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionUsage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenAiProvider {
        OpenAiProvider::with_endpoint(
            server.uri(),
            SecretString::from("sk-test"),
            "gpt-4o-mini".to_string(),
        )
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(vec![
            ChatMessage::system("You are Borat."),
            ChatMessage::user("Hello"),
        ])
        .with_temperature(0.8)
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.8,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Very nice! Great success!"}}
                ],
                "usage": {"prompt_tokens": 42, "completion_tokens": 7}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider_for(&server).complete(request()).await.unwrap();
        assert_eq!(response.content, "Very nice! Great success!");
        assert_eq!(response.input_tokens, Some(42));
        assert_eq!(response.output_tokens, Some(7));
    }

    #[tokio::test]
    async fn test_401_maps_to_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = provider_for(&server).complete(request()).await;
        assert!(matches!(result, Err(LlmError::AuthFailed { .. })));
    }

    #[tokio::test]
    async fn test_429_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = provider_for(&server).complete(request()).await;
        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = provider_for(&server).complete(request()).await;
        match result {
            Err(LlmError::RequestFailed { reason, .. }) => assert!(reason.contains("500")),
            other => panic!("expected RequestFailed, got {:?}", other.map(|r| r.content)),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = provider_for(&server).complete(request()).await;
        assert!(matches!(result, Err(LlmError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_empty_choices_maps_to_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let result = provider_for(&server).complete(request()).await;
        assert!(matches!(result, Err(LlmError::InvalidResponse { .. })));
    }
}
