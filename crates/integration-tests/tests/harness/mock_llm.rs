//! Mock chat-completion backend for the translation step
//!
//! Implements the minimal OpenAI-compatible surface the translator uses

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

pub const GATEWAY_KEY: &str = "llm-gateway-key";

/// Mock translation backend that returns a canned translation
pub struct MockLlm {
    base_url: String,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

enum Reply {
    Content(Option<String>),
    Status(StatusCode),
}

struct MockLlmState {
    completion_count: AtomicU32,
    reply: Reply,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockLlm {
    /// Start a mock that translates everything to `content`
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Content(Some(content.to_owned()))).await
    }

    /// Start a mock whose completion has `null` content
    pub async fn start_empty() -> anyhow::Result<Self> {
        Self::start_inner(Reply::Content(None)).await
    }

    /// Start a mock that fails every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Status(StatusCode::from_u16(status)?)).await
    }

    async fn start_inner(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            completion_count: AtomicU32::new(0),
            reply,
            requests: Mutex::default(),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let (addr, shutdown) = super::spawn(app).await?;

        Ok(Self {
            base_url: format!("http://{addr}/v1"),
            shutdown,
            state,
        })
    }

    /// Base URL including `/v1`, since the translator appends `/chat/completions`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Messages of the most recent request as `(role, content)` pairs
    pub fn last_messages(&self) -> Vec<(String, String)> {
        self.state
            .requests
            .lock()
            .unwrap()
            .last()
            .map(|req| {
                req.messages
                    .iter()
                    .map(|m| (m.role.clone(), m.content.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// User message of every request received, in arrival order
    pub fn user_texts(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|req| req.messages.iter().find(|m| m.role == "user"))
            .map(|m| m.content.clone())
            .collect()
    }

    /// Model named in the most recent request
    pub fn last_model(&self) -> Option<String> {
        self.state.requests.lock().unwrap().last().map(|req| req.model.clone())
    }

    /// Bearer credential of the most recent request
    pub fn last_authorization(&self) -> Option<String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .last()
            .and_then(|req| req.authorization.clone())
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    authorization: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    headers: axum::http::HeaderMap,
    Json(mut req): Json<ChatCompletionRequest>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    req.authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let model = req.model.clone();
    state.requests.lock().unwrap().push(req);

    let content = match &state.reply {
        Reply::Status(status) => {
            return (
                *status,
                Json(serde_json::json!({
                    "error": {
                        "message": "mock server intentional failure",
                        "type": "server_error"
                    }
                })),
            )
                .into_response();
        }
        Reply::Content(content) => content.clone(),
    };

    Json(serde_json::json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 40, "completion_tokens": 5, "total_tokens": 45 }
    }))
    .into_response()
}
