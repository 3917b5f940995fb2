//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use reo_config::{Config, CorsConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;
use url::Url;

use super::mock_identity::{MockIdentity, PROJECT_KEY};
use super::mock_llm::{GATEWAY_KEY, MockLlm};
use super::mock_tts::{MockTts, VENDOR_KEY};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no upstreams
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point identity verification at a mock identity service
    pub fn with_identity(mut self, mock: &MockIdentity) -> Self {
        self.config.auth.url = Some(url(mock.base_url()));
        self.config.auth.api_key = Some(SecretString::from(PROJECT_KEY));
        self
    }

    /// Point translation at a mock chat-completion backend
    pub fn with_translation(mut self, mock: &MockLlm) -> Self {
        self.config.translation.base_url = url(mock.base_url());
        self.config.translation.api_key = Some(SecretString::from(GATEWAY_KEY));
        self.config.translation.model = "test/translator".to_owned();
        self
    }

    /// Point synthesis at a mock TTS vendor
    pub fn with_tts(mut self, mock: &MockTts) -> Self {
        self.config.tts.base_url = url(mock.base_url());
        self.config.tts.api_key = Some(SecretString::from(VENDOR_KEY));
        self
    }

    /// Wire all three upstreams
    pub fn with_upstreams(self, identity: &MockIdentity, llm: &MockLlm, tts: &MockTts) -> Self {
        self.with_identity(identity).with_translation(llm).with_tts(tts)
    }

    /// Remove the identity service key
    pub fn without_identity_key(mut self) -> Self {
        self.config.auth.api_key = None;
        self
    }

    /// Remove the translation gateway key
    pub fn without_translation_key(mut self) -> Self {
        self.config.translation.api_key = None;
        self
    }

    /// Remove the TTS vendor key
    pub fn without_tts_key(mut self) -> Self {
        self.config.tts.api_key = None;
        self
    }

    /// Limit the translated text length
    pub fn with_max_translated_chars(mut self, max: usize) -> Self {
        self.config.speech.max_translated_chars = Some(max);
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

fn url(raw: &str) -> Url {
    raw.parse().expect("valid URL")
}
