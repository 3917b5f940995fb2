#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Speech synthesis endpoint: authenticate, validate, translate, synthesize

mod error;
#[cfg(test)]
mod fakes;
mod pipeline;
mod response;
mod validate;

use std::sync::Arc;

use axum::{Router, body::Body, extract::State, http::HeaderMap, routing::post};

pub use error::{Result, SpeechError};
pub use pipeline::{Limits, MAX_BODY_BYTES, SpeechPipeline};
pub use response::{AUDIO_CONTENT_TYPE, SynthesisResult, TRANSLATED_TEXT_HEADER};
pub use validate::{InputError, MAX_SPEED, MIN_SPEED, SpeechPayload, SynthesisRequest, normalize_speed};

/// Build the speech pipeline from configuration
pub fn build_pipeline(config: &reo_config::Config) -> anyhow::Result<Arc<SpeechPipeline>> {
    let pipeline = Arc::new(
        SpeechPipeline::from_config(config)
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech pipeline: {e}"))?,
    );
    Ok(pipeline)
}

/// Create the endpoint router for speech synthesis at `path`
pub fn endpoint_router(path: &str) -> Router<Arc<SpeechPipeline>> {
    Router::new().route(path, post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(pipeline): State<Arc<SpeechPipeline>>,
    headers: HeaderMap,
    body: Body,
) -> Result<axum::response::Response> {
    let result = pipeline.run(&headers, body).await?;

    tracing::debug!("speech synthesis handler complete");

    result.into_response()
}
