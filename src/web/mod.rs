//! Web gateway: the chat page plus a small JSON API.
//!
//! `POST /api/message` runs one engine step under the session's mutex, so
//! a session processes one submission at a time; the UI re-renders from
//! `GET /api/transcript/{id}` afterwards.

mod page;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::chat::{ChatEngine, SessionManager, TurnOutcome};
use crate::config::UiVariant;
use crate::error::GatewayError;
use crate::web::types::{
    HealthResponse, SendMessageRequest, SendMessageResponse, TranscriptResponse, TurnInfo,
};

/// Sessions idle longer than this are pruned.
const SESSION_MAX_IDLE: Duration = Duration::from_secs(60 * 60);

/// How often the pruning task wakes up.
const PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Shared state for the gateway.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub sessions: Arc<SessionManager>,
    pub ui_variant: UiVariant,
}

/// The public-facing web server.
pub struct WebGateway;

impl WebGateway {
    /// Build the axum router.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(page_handler))
            .route("/api/message", post(send_message))
            .route("/api/transcript/{session_id}", get(get_transcript))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind and serve until the process exits.
    ///
    /// Also spawns the idle-session pruning task.
    pub async fn start(state: AppState, host: &str, port: u16) -> Result<(), GatewayError> {
        let sessions = Arc::clone(&state.sessions);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(PRUNE_INTERVAL);
            interval.tick().await; // first tick is immediate
            loop {
                interval.tick().await;
                sessions.prune_stale(SESSION_MAX_IDLE).await;
            }
        });

        let router = Self::router(state);
        let addr = format!("{host}:{port}");

        let listener =
            tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|source| GatewayError::Bind {
                    addr: addr.clone(),
                    source,
                })?;

        tracing::info!("Web gateway listening on http://{}", addr);

        axum::serve(listener, router).await?;
        Ok(())
    }
}

// -- Handlers --

async fn page_handler(State(state): State<AppState>) -> Html<String> {
    Html(page::render(state.engine.persona(), state.ui_variant))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        persona: state.engine.persona().name,
    })
}

async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> (StatusCode, Json<SendMessageResponse>) {
    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    let session = state.sessions.get_or_create(session_id).await;

    // Holding the lock across the provider call serializes this session.
    let mut session = session.lock().await;

    match state.engine.take_turn(&mut session, &req.content).await {
        Ok(TurnOutcome::Replied(reply)) => (
            StatusCode::OK,
            Json(SendMessageResponse {
                session_id,
                status: "replied",
                reply: Some(reply),
                error: None,
            }),
        ),
        Ok(TurnOutcome::Ignored) => (
            StatusCode::OK,
            Json(SendMessageResponse {
                session_id,
                status: "ignored",
                reply: None,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(session_id = %session_id, "Turn failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(SendMessageResponse {
                    session_id,
                    status: "error",
                    reply: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, StatusCode> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    let session = session.lock().await;
    Ok(Json(TranscriptResponse {
        session_id,
        turns: session.transcript.turns().iter().map(TurnInfo::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::{CompletionProvider, CompletionRequest, CompletionResponse};
    use crate::persona::borat;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct EchoProvider;

    #[async_trait]
    impl CompletionProvider for EchoProvider {
        async fn complete(
            &self,
            req: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                content: format!("Very nice! You say: {}", req.messages.last().unwrap().content),
                input_tokens: None,
                output_tokens: None,
            })
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    fn test_router() -> Router {
        let persona = borat();
        let engine = Arc::new(ChatEngine::new(Arc::new(EchoProvider), persona.clone(), 0.8));
        let sessions = Arc::new(SessionManager::new(persona, 3));
        WebGateway::router(AppState {
            engine,
            sessions,
            ui_variant: UiVariant::Banner,
        })
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_message(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/message")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_page_served_at_root() {
        let router = test_router();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Borat Sagdiyev"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_message_creates_session_and_replies() {
        let router = test_router();
        let response = router
            .oneshot(post_message(serde_json::json!({"content": "Hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "replied");
        assert!(body["reply"].as_str().unwrap().contains("Hello"));
        assert!(body["session_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_empty_message_is_ignored() {
        let router = test_router();
        let response = router
            .oneshot(post_message(serde_json::json!({"content": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ignored");
        assert!(body.get("reply").is_none());
    }

    #[tokio::test]
    async fn test_transcript_roundtrip() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(post_message(serde_json::json!({"content": "Hello"})))
            .await
            .unwrap();
        let body = json_body(response).await;
        let session_id = body["session_id"].as_str().unwrap().to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/transcript/{session_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let turns = body["turns"].as_array().unwrap();
        // Greeting, user turn, assistant turn.
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0]["speaker"], "assistant");
        assert_eq!(turns[1]["speaker"], "user");
        assert_eq!(turns[1]["text"], "Hello");
        assert_eq!(turns[2]["speaker"], "assistant");
    }

    #[tokio::test]
    async fn test_unknown_transcript_is_404() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/transcript/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_failed_turn() {
        struct DownProvider;

        #[async_trait]
        impl CompletionProvider for DownProvider {
            async fn complete(
                &self,
                _req: CompletionRequest,
            ) -> Result<CompletionResponse, LlmError> {
                Err(LlmError::RateLimited {
                    provider: "openai".to_string(),
                })
            }

            fn model_name(&self) -> &str {
                "down"
            }
        }

        let persona = borat();
        let engine = Arc::new(ChatEngine::new(Arc::new(DownProvider), persona.clone(), 0.8));
        let sessions = Arc::new(SessionManager::new(persona, 3));
        let router = WebGateway::router(AppState {
            engine,
            sessions,
            ui_variant: UiVariant::Classic,
        });

        let response = router
            .oneshot(post_message(serde_json::json!({"content": "Hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().unwrap().contains("openai"));
    }
}
