#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod speech;
pub mod telemetry;
pub mod translation;
pub mod tts;

use serde::Deserialize;

pub use auth::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use speech::*;
pub use telemetry::*;
pub use translation::*;
pub use tts::*;

/// Top-level service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech endpoint limits and routing
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Identity service used to verify bearer tokens
    #[serde(default)]
    pub auth: AuthConfig,
    /// Chat-completion endpoint used for translation
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Text-to-speech vendor
    #[serde(default)]
    pub tts: TtsConfig,
    /// Logging and OTLP export
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
