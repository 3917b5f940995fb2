use http::StatusCode;
use reo_core::HttpError;

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request
    #[error("Unauthorized: Missing authentication")]
    MissingCredentials,

    /// Identity service rejected the token or returned no subject
    #[error("Unauthorized: Invalid token")]
    InvalidToken,

    /// Identity service could not be reached or answered unexpectedly
    #[error("identity service request failed: {0}")]
    Verification(String),

    /// Identity service URL or key is not configured
    #[error("identity service is not configured: {0}")]
    NotConfigured(&'static str),
}

impl HttpError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::InvalidToken | Self::Verification(_) => StatusCode::UNAUTHORIZED,
            Self::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingCredentials | Self::InvalidToken | Self::Verification(_) => "unauthorized",
            Self::NotConfigured(_) => "internal_configuration_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Verification failures are indistinguishable from bad tokens to the caller
            Self::Verification(_) => Self::InvalidToken.to_string(),
            Self::NotConfigured(_) => "Server configuration error".to_owned(),
            _ => self.to_string(),
        }
    }
}
