use axum::{body::Body, response::Response};
use http::{HeaderName, HeaderValue, StatusCode, header};
use tts::SpeechAudio;

use crate::error::SpeechError;

/// Header carrying the percent-encoded translation next to the audio
pub static TRANSLATED_TEXT_HEADER: HeaderName = HeaderName::from_static("x-translated-text");

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Outcome of a successful pipeline run
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub translated_text: String,
    pub audio: SpeechAudio,
}

impl SynthesisResult {
    /// Percent-encoded form of the translated text, safe for a header value
    pub fn encoded_text(&self) -> String {
        urlencoding::encode(&self.translated_text).into_owned()
    }

    /// Build the `200 audio/mpeg` response
    pub fn into_response(self) -> Result<Response, SpeechError> {
        let translated = HeaderValue::try_from(self.encoded_text())
            .map_err(|e| SpeechError::Internal(format!("translated text header: {e}")))?;

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .header(&TRANSLATED_TEXT_HEADER, translated)
            .body(Body::from(self.audio.audio))
            .map_err(|e| SpeechError::Internal(e.to_string()))
    }
}
