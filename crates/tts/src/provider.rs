pub mod elevenlabs;

use async_trait::async_trait;

use crate::types::{SpeechAudio, SpeechRequest};

/// Trait for text-to-speech vendor implementations
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to MPEG audio
    async fn synthesize(&self, request: SpeechRequest<'_>) -> crate::error::Result<SpeechAudio>;

    /// Get the vendor name
    fn name(&self) -> &str;
}
