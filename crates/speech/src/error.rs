use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use reo_auth::AuthError;
use reo_core::HttpError;
use serde::Serialize;
use thiserror::Error;
use translate::TranslateError;
use tts::TtsError;

use crate::validate::InputError;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Any failure that ends a speech request
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Translation(#[from] TranslateError),

    #[error(transparent)]
    Synthesis(#[from] TtsError),

    /// Translated text exceeded the configured post-translation limit
    #[error("Translated text exceeds maximum length of {max} characters")]
    TranslatedTextTooLong { max: usize },

    /// Body exceeded the transport limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Body could not be read from the connection
    #[error("Failed to read request body: {0}")]
    Internal(String),
}

impl HttpError for SpeechError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(e) => e.status_code(),
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Translation(e) => e.status_code(),
            Self::Synthesis(e) => e.status_code(),
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TranslatedTextTooLong { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Auth(e) => e.error_type(),
            Self::InvalidInput(_) => "invalid_input",
            Self::Translation(e) => e.error_type(),
            Self::Synthesis(e) => e.error_type(),
            Self::TranslatedTextTooLong { .. } => "translation_failed",
            Self::PayloadTooLarge => "payload_too_large",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Auth(e) => e.client_message(),
            Self::InvalidInput(e) => e.to_string(),
            Self::Translation(e) => e.client_message(),
            Self::Synthesis(e) => e.client_message(),
            Self::Internal(_) => "Internal server error".to_owned(),
            _ => self.to_string(),
        }
    }
}

/// Error body returned to clients
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, error_type = self.error_type(), "speech request failed");
        } else {
            tracing::debug!(error = %self, error_type = self.error_type(), "speech request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}
