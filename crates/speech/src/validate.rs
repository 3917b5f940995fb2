//! Decode-then-validate step for the request body
//!
//! Runs before any translation or synthesis call and rejects on the first
//! violated constraint.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::value::RawValue;
use translate::Language;
use tts::VoicePreset;

/// Speaking-rate bounds accepted by the synthesis vendor
pub const MIN_SPEED: f64 = 0.7;
pub const MAX_SPEED: f64 = 1.2;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Request body as sent by the client
///
/// Fields are kept as raw JSON so a wrongly typed value is reported by the
/// check for that field, and an out-of-range number in `speed` is clamped
/// rather than failing the decode. `null` reads as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechPayload {
    #[serde(default)]
    pub text: Option<Box<RawValue>>,
    #[serde(default)]
    pub language: Option<Box<RawValue>>,
    #[serde(default)]
    pub voice_type: Option<Box<RawValue>>,
    #[serde(default)]
    pub speed: Option<Box<RawValue>>,
}

/// Validated synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: Language,
    pub voice: Option<VoicePreset>,
    pub speed: f64,
}

/// Reasons a request body is rejected
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Text is required and must be a non-empty string")]
    EmptyText,

    #[error("Text exceeds maximum length of {max} characters")]
    TextTooLong { max: usize },

    #[error("Invalid language. Supported languages: {}", Language::codes().join(", "))]
    InvalidLanguage,

    #[error("Invalid voice type. Supported voices: {}", VoicePreset::names().join(", "))]
    InvalidVoice,
}

/// Decode a JSON object body and validate it
pub fn decode(body: &[u8], max_text_chars: usize) -> Result<SynthesisRequest, InputError> {
    if body.trim_ascii_start().first() != Some(&b'{') {
        return Err(InputError::MalformedBody("expected a JSON object".to_owned()));
    }

    let payload: SpeechPayload =
        serde_json::from_slice(body).map_err(|e| InputError::MalformedBody(e.to_string()))?;

    validate(&payload, max_text_chars)
}

/// Validate a decoded payload
///
/// Text length is measured in characters on the raw text, not the
/// trimmed one. Language matching ignores ASCII case; voice presets do not.
pub fn validate(payload: &SpeechPayload, max_text_chars: usize) -> Result<SynthesisRequest, InputError> {
    let text = string_field(payload.text.as_deref())
        .filter(|text| !text.trim().is_empty())
        .ok_or(InputError::EmptyText)?;

    if text.chars().count() > max_text_chars {
        return Err(InputError::TextTooLong { max: max_text_chars });
    }

    let language = string_field(payload.language.as_deref())
        .and_then(|code| Language::from_str(&code).ok())
        .ok_or(InputError::InvalidLanguage)?;

    let voice = payload
        .voice_type
        .as_deref()
        .map(|raw| {
            string_field(Some(raw))
                .and_then(|name| VoicePreset::from_str(&name).ok())
                .ok_or(InputError::InvalidVoice)
        })
        .transpose()?;

    Ok(SynthesisRequest {
        text,
        language,
        voice,
        speed: normalize_speed(payload.speed.as_deref().and_then(speed_value)),
    })
}

/// Clamp a requested speed into `[MIN_SPEED, MAX_SPEED]`
///
/// Missing and NaN values become `DEFAULT_SPEED`. Infinities clamp to the
/// nearest bound.
pub fn normalize_speed(speed: Option<f64>) -> f64 {
    speed
        .filter(|value| !value.is_nan())
        .map_or(DEFAULT_SPEED, |value| value.clamp(MIN_SPEED, MAX_SPEED))
}

fn string_field(raw: Option<&RawValue>) -> Option<String> {
    raw.and_then(|raw| serde_json::from_str(raw.get()).ok())
}

/// Numeric reading of a raw `speed` value
///
/// Number literals too large for `f64` read as infinite. Strings are read
/// by their leading decimal prefix. Other JSON types have no reading.
fn speed_value(raw: &RawValue) -> Option<f64> {
    let raw = raw.get().trim();
    match raw.as_bytes().first()? {
        b'-' | b'0'..=b'9' => raw.parse().ok(),
        b'"' => serde_json::from_str::<String>(raw).ok().and_then(|s| leading_decimal(&s)),
        _ => None,
    }
}

/// Parse the longest decimal prefix of `input`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"1.1x"`
/// reads as 1.1. `Infinity` is the only spelled-out value; `inf` and `NaN`
/// have no reading.
fn leading_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |at: usize| {
        bytes
            .get(at..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    s[..end].parse().ok()
}
