use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Identity service used to verify caller bearer tokens
///
/// Both fields are optional so the service can start without them; a
/// request that reaches token verification while either is missing fails
/// with a configuration error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Base URL of the identity service
    #[serde(default)]
    pub url: Option<Url>,

    /// Project key sent alongside the caller token
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Timeout in seconds for a single verification call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl AuthConfig {
    /// Verification timeout as a Duration
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

const fn default_timeout_seconds() -> u64 {
    10
}
