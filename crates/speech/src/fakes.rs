//! In-process stand-ins for the upstream clients, recording every call

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reo_auth::{AuthError, TokenVerifier};
use reo_core::Caller;
use translate::{Language, TranslateError, Translator};
use tts::{SpeechAudio, SpeechRequest, SpeechSynthesizer, TtsError, VoicePreset};

pub struct FakeVerifier {
    caller: Option<String>,
    tokens: Mutex<Vec<String>>,
}

impl FakeVerifier {
    pub fn accepting(caller: &str) -> Self {
        Self {
            caller: Some(caller.to_owned()),
            tokens: Mutex::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            caller: None,
            tokens: Mutex::default(),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<Caller, AuthError> {
        self.tokens.lock().unwrap().push(token.to_owned());
        self.caller.as_deref().map(Caller::new).ok_or(AuthError::InvalidToken)
    }
}

pub struct FakeTranslator {
    text: Option<String>,
    error: Mutex<Option<TranslateError>>,
    calls: Mutex<Vec<(String, Language)>>,
}

impl FakeTranslator {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            error: Mutex::default(),
            calls: Mutex::default(),
        }
    }

    pub fn failing(err: TranslateError) -> Self {
        Self {
            text: None,
            error: Mutex::new(Some(err)),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, language: Language) -> translate::Result<String> {
        self.calls.lock().unwrap().push((text.to_owned(), language));

        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(self.error.lock().unwrap().take().unwrap_or(TranslateError::EmptyResult)),
        }
    }
}

/// Recorded synthesis call
#[derive(Debug, Clone)]
pub struct SynthesisCall {
    pub text: String,
    pub voice: Option<VoicePreset>,
    pub speed: f64,
}

pub struct FakeSynthesizer {
    audio: Option<Bytes>,
    error: Mutex<Option<TtsError>>,
    calls: Mutex<Vec<SynthesisCall>>,
}

impl FakeSynthesizer {
    pub fn returning(audio: &[u8]) -> Self {
        Self {
            audio: Some(Bytes::copy_from_slice(audio)),
            error: Mutex::default(),
            calls: Mutex::default(),
        }
    }

    pub fn failing(err: TtsError) -> Self {
        Self {
            audio: None,
            error: Mutex::new(Some(err)),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<SynthesisCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, request: SpeechRequest<'_>) -> tts::Result<SpeechAudio> {
        self.calls.lock().unwrap().push(SynthesisCall {
            text: request.text.to_owned(),
            voice: request.voice,
            speed: request.speed,
        });

        match &self.audio {
            Some(audio) => Ok(SpeechAudio { audio: audio.clone() }),
            None => Err(self
                .error
                .lock()
                .unwrap()
                .take()
                .unwrap_or(TtsError::ReadError("exhausted".to_owned()))),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}
