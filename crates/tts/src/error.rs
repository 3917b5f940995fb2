use http::StatusCode;
use reo_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Synthesis step failures
#[derive(Debug, Error)]
pub enum TtsError {
    /// Vendor key is not configured
    #[error("TTS vendor key is not configured")]
    NotConfigured,

    /// Voice table in configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Vendor API returned an error
    #[error("TTS vendor error ({status})")]
    ProviderApiError { status: u16 },

    /// Audio body could not be read
    #[error("Failed to read audio: {0}")]
    ReadError(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::NotConfigured | Self::ConfigError(_) => "internal_configuration_error",
            _ => "synthesis_failed",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::NotConfigured | Self::ConfigError(_) => "Server configuration error".to_owned(),
            Self::ProviderApiError { status } => format!("Speech synthesis failed: upstream status {status}"),
            _ => "Speech synthesis failed".to_owned(),
        }
    }
}
