#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod types;
mod voice;

pub use error::{Result, TtsError};
pub use provider::{SpeechSynthesizer, elevenlabs::ElevenLabsSynthesizer};
pub use types::{SpeechAudio, SpeechRequest};
pub use voice::{VoicePreset, VoiceTable};
