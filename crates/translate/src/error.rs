use http::StatusCode;
use reo_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translation step failures
///
/// Every variant is fatal for the request; none is retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Gateway key is not configured
    #[error("translation gateway key is not configured")]
    NotConfigured,

    /// Request could not be sent or the response not read
    #[error("translation request failed: {0}")]
    Connection(String),

    /// Gateway answered with a non-success status
    #[error("translation service error: {status}")]
    Upstream { status: u16 },

    /// Response body did not match the chat-completion shape
    #[error("translation response could not be parsed: {0}")]
    InvalidResponse(String),

    /// Response carried no message content
    #[error("translation returned no text")]
    EmptyResult,
}

impl HttpError for TranslateError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::NotConfigured => "internal_configuration_error",
            _ => "translation_failed",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::NotConfigured => "Server configuration error".to_owned(),
            Self::Upstream { status } => format!("Translation failed: upstream status {status}"),
            _ => "Translation failed".to_owned(),
        }
    }
}
