//! Mock text-to-speech vendor
//!
//! Accepts `POST /v1/text-to-speech/{voice_id}` and returns fixed MPEG bytes

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

pub const VENDOR_KEY: &str = "tts-vendor-key";

/// Bytes returned as the synthesized audio
pub const AUDIO: &[u8] = &[0x49, 0x44, 0x33, 0x04, 0x00, 0xFF, 0xFB, 0x90, 0x44];

/// One request received by the mock
#[derive(Debug, Clone)]
pub struct RecordedSpeech {
    pub voice_id: String,
    pub output_format: Option<String>,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

impl RecordedSpeech {
    pub fn text(&self) -> &str {
        self.body["text"].as_str().unwrap_or_default()
    }

    pub fn speed(&self) -> f64 {
        self.body["voice_settings"]["speed"].as_f64().unwrap_or(f64::NAN)
    }
}

/// Mock TTS vendor
pub struct MockTts {
    base_url: String,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    request_count: AtomicU32,
    failure: Option<StatusCode>,
    requests: Mutex<Vec<RecordedSpeech>>,
}

impl MockTts {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that fails every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Some(StatusCode::from_u16(status)?)).await
    }

    async fn start_inner(failure: Option<StatusCode>) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            request_count: AtomicU32::new(0),
            failure,
            requests: Mutex::default(),
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let (addr, shutdown) = super::spawn(app).await?;

        Ok(Self {
            base_url: format!("http://{addr}/v1"),
            shutdown,
            state,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of synthesis requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedSpeech> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<RecordedSpeech> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(
    State(state): State<Arc<MockTtsState>>,
    Path(voice_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    state.requests.lock().unwrap().push(RecordedSpeech {
        voice_id,
        output_format: query.get("output_format").cloned(),
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    });

    if let Some(status) = state.failure {
        return (
            status,
            Json(serde_json::json!({
                "detail": { "status": "quota_exceeded", "message": "mock failure" }
            })),
        )
            .into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], AUDIO).into_response()
}
