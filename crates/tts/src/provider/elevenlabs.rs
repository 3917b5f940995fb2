use async_trait::async_trait;
use reo_config::{TtsConfig, VoiceSettingsConfig};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::TtsError,
    types::{SpeechAudio, SpeechRequest},
    voice::VoiceTable,
};

use super::SpeechSynthesizer;

/// `ElevenLabs` TTS vendor
pub struct ElevenLabsSynthesizer {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model_id: String,
    output_format: String,
    voices: VoiceTable,
    settings: VoiceSettingsConfig,
}

impl ElevenLabsSynthesizer {
    /// Create the synthesizer from configuration
    ///
    /// A missing API key is reported per request, not here.
    pub fn new(config: &TtsConfig) -> crate::Result<Self> {
        if config.api_key.is_none() {
            tracing::warn!("TTS vendor key missing, speech requests will fail until configured");
        }

        Ok(Self {
            client: reo_core::http_client(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
            output_format: config.output_format.clone(),
            voices: VoiceTable::from_config(config)?,
            settings: config.voice_settings.clone(),
        })
    }

    fn speech_url(&self, voice_id: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/text-to-speech/{voice_id}")
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    style: f64,
    use_speaker_boost: bool,
    speed: f64,
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, request: SpeechRequest<'_>) -> crate::error::Result<SpeechAudio> {
        let api_key = self.api_key.as_ref().ok_or(TtsError::NotConfigured)?;
        let voice_id = self.voices.voice_id(request.voice);
        let url = self.speech_url(voice_id);

        tracing::debug!(
            model = %self.model_id,
            voice = voice_id,
            speed = request.speed,
            input_chars = request.text.chars().count(),
            "ElevenLabs TTS request",
        );

        let body = ElevenLabsRequest {
            text: request.text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: self.settings.stability,
                similarity_boost: self.settings.similarity_boost,
                style: self.settings.style,
                use_speaker_boost: self.settings.use_speaker_boost,
                speed: request.speed,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", api_key.expose_secret())
            .header(http::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
            });
        }

        // The whole body is buffered; callers receive audio only once complete
        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::ReadError(e.to_string())
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechAudio { audio })
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
