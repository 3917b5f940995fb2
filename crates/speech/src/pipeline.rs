use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use http::HeaderMap;
use reo_auth::{IdentityClient, TokenVerifier};
use reo_config::Config;
use reo_core::{Caller, HttpError};
use reo_telemetry::SpeechMetrics;
use tracing::Instrument;
use translate::{ChatTranslator, Translator};
use tts::{ElevenLabsSynthesizer, SpeechRequest, SpeechSynthesizer};

use crate::{
    error::{Result, SpeechError},
    response::SynthesisResult,
    validate::{self, SynthesisRequest},
};

/// Request body size accepted by the endpoint
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Length limits applied around translation
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_text_chars: usize,
    pub max_translated_chars: Option<usize>,
    pub max_body_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_chars: 5000,
            max_translated_chars: None,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

/// Authenticate, validate, translate and synthesize, in that order
///
/// Holds no per-request state, so one instance serves all requests
/// concurrently. The first failing stage ends the request; later stages
/// are never called.
pub struct SpeechPipeline {
    verifier: Arc<dyn TokenVerifier>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    limits: Limits,
    metrics: SpeechMetrics,
}

impl SpeechPipeline {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        limits: Limits,
    ) -> Self {
        Self {
            verifier,
            translator,
            synthesizer,
            limits,
            metrics: SpeechMetrics::new(),
        }
    }

    /// Build the pipeline with the identity, translation and TTS clients
    /// described by `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let verifier = IdentityClient::new(&config.auth)
            .map_err(|e| anyhow::anyhow!("Failed to build identity client: {e}"))?;
        let translator = ChatTranslator::new(&config.translation);
        let synthesizer = ElevenLabsSynthesizer::new(&config.tts)
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS client: {e}"))?;

        tracing::debug!(
            translation_model = %config.translation.model,
            tts_provider = synthesizer.name(),
            "speech pipeline initialized",
        );

        Ok(Self::new(
            Arc::new(verifier),
            Arc::new(translator),
            Arc::new(synthesizer),
            Limits {
                max_text_chars: config.speech.max_text_chars,
                max_translated_chars: config.speech.max_translated_chars,
                max_body_bytes: MAX_BODY_BYTES,
            },
        ))
    }

    /// Run one request through every stage
    pub async fn run(&self, headers: &HeaderMap, body: Body) -> Result<SynthesisResult> {
        let span = tracing::info_span!(
            "speech_request",
            request_id = %uuid::Uuid::new_v4(),
            caller_id = tracing::field::Empty,
        );

        let result = self.run_stages(headers, body).instrument(span).await;

        match &result {
            Ok(_) => self.metrics.record_request("ok"),
            Err(e) => self.metrics.record_request(e.error_type()),
        }

        result
    }

    async fn run_stages(&self, headers: &HeaderMap, body: Body) -> Result<SynthesisResult> {
        let caller = self.authenticate(headers).await?;
        tracing::Span::current().record("caller_id", tracing::field::display(&caller));

        let body = self.read_body(body).await?;
        let request = validate::decode(&body, self.limits.max_text_chars)?;

        tracing::debug!(
            language = %request.language,
            voice = ?request.voice,
            speed = request.speed,
            text_chars = request.text.chars().count(),
            "request validated",
        );

        let translated_text = self.translate(&request).await?;
        let audio = self.synthesize(&request, &translated_text).await?;

        tracing::info!(
            language = %request.language,
            audio_bytes = audio.len(),
            "speech synthesized",
        );

        Ok(SynthesisResult { translated_text, audio })
    }

    async fn authenticate(&self, headers: &HeaderMap) -> Result<Caller> {
        let token = reo_auth::bearer_token(headers)?;

        let start = Instant::now();
        let caller = self.verifier.verify(token).await;
        self.metrics.record_stage("auth", start);

        Ok(caller?)
    }

    async fn read_body(&self, body: Body) -> Result<bytes::Bytes> {
        axum::body::to_bytes(body, self.limits.max_body_bytes)
            .await
            .map_err(|e| {
                let inner = e.into_inner();
                if inner.downcast_ref::<http_body_util::LengthLimitError>().is_some() {
                    SpeechError::PayloadTooLarge
                } else {
                    SpeechError::Internal(inner.to_string())
                }
            })
    }

    async fn translate(&self, request: &SynthesisRequest) -> Result<String> {
        let start = Instant::now();
        let translated = self.translator.translate(&request.text, request.language).await;
        self.metrics.record_stage("translate", start);

        let translated = translated?;

        tracing::debug!(
            language = %request.language,
            elapsed_ms = start.elapsed().as_millis(),
            output_chars = translated.chars().count(),
            "translation stage complete",
        );

        if let Some(max) = self.limits.max_translated_chars
            && translated.chars().count() > max
        {
            return Err(SpeechError::TranslatedTextTooLong { max });
        }

        Ok(translated)
    }

    async fn synthesize(&self, request: &SynthesisRequest, text: &str) -> Result<tts::SpeechAudio> {
        let start = Instant::now();
        let audio = self
            .synthesizer
            .synthesize(SpeechRequest {
                text,
                voice: request.voice,
                speed: request.speed,
            })
            .await;
        self.metrics.record_stage("synthesize", start);

        let audio = audio?;

        tracing::debug!(
            provider = self.synthesizer.name(),
            elapsed_ms = start.elapsed().as_millis(),
            audio_bytes = audio.len(),
            "synthesis stage complete",
        );

        Ok(audio)
    }
}
