use async_trait::async_trait;
use reo_config::AuthConfig;
use reo_core::Caller;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{AuthError, TokenVerifier};

/// Path of the identity service endpoint that returns the token's subject
const USER_PATH: &str = "auth/v1/user";

/// Subject claims returned by the identity service
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default, alias = "sub")]
    id: Option<String>,
}

/// Verifies caller tokens by asking the identity service who they belong to
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: Option<Url>,
    api_key: Option<SecretString>,
}

impl IdentityClient {
    /// Create a client from configuration
    ///
    /// Missing URL or key are tolerated here and reported on each
    /// verification attempt instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &AuthConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

        if config.url.is_none() || config.api_key.is_none() {
            tracing::warn!("identity service URL or key missing, speech requests will fail until configured");
        }

        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn user_url(&self) -> Result<Url, AuthError> {
        let base = self.base_url.as_ref().ok_or(AuthError::NotConfigured("url"))?;

        // Keep any path prefix on the configured URL
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        base.join(USER_PATH)
            .map_err(|e| AuthError::Verification(format!("invalid identity URL: {e}")))
    }
}

#[async_trait]
impl TokenVerifier for IdentityClient {
    async fn verify(&self, token: &str) -> Result<Caller, AuthError> {
        let api_key = self.api_key.as_ref().ok_or(AuthError::NotConfigured("api_key"))?;
        let url = self.user_url()?;

        let response = self
            .http
            .get(url)
            .header("apikey", api_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "identity service request failed");
                AuthError::Verification(e.to_string())
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::debug!(%status, "identity service rejected token");
            return Err(AuthError::InvalidToken);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "identity service returned an error");
            return Err(AuthError::Verification(format!("identity service returned {status}")));
        }

        let claims: Claims = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "identity service returned unreadable claims");
            AuthError::InvalidToken
        })?;

        claims
            .id
            .filter(|id| !id.trim().is_empty())
            .map(Caller::new)
            .ok_or(AuthError::InvalidToken)
    }
}
