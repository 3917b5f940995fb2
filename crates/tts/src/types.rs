use bytes::Bytes;

use crate::VoicePreset;

/// Synthesis input after validation and translation
#[derive(Debug, Clone, Copy)]
pub struct SpeechRequest<'a> {
    /// Text to speak, already in the target language
    pub text: &'a str,
    /// Voice preset; `None` selects the default voice
    pub voice: Option<VoicePreset>,
    /// Speaking rate, already clamped to the supported range
    pub speed: f64,
}

/// Complete MPEG audio returned by the vendor
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Bytes,
}

impl SpeechAudio {
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
