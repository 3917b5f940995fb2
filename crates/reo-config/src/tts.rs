use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Text-to-speech vendor configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Vendor API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Multilingual synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Vendor output format; must be an MPEG variant
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Voice used when a preset has no entry in `voices`
    #[serde(default = "default_voice_id")]
    pub default_voice_id: String,
    /// Voice preset name to vendor voice id
    #[serde(default = "default_voices")]
    pub voices: IndexMap<String, String>,
    /// Voice-shaping parameters sent with every request
    #[serde(default)]
    pub voice_settings: VoiceSettingsConfig,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model_id: default_model_id(),
            output_format: default_output_format(),
            default_voice_id: default_voice_id(),
            voices: default_voices(),
            voice_settings: VoiceSettingsConfig::default(),
        }
    }
}

/// Voice-shaping parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceSettingsConfig {
    #[serde(default = "default_stability")]
    pub stability: f64,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f64,
    #[serde(default = "default_style")]
    pub style: f64,
    #[serde(default = "default_speaker_boost")]
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettingsConfig {
    fn default() -> Self {
        Self {
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            style: default_style(),
            use_speaker_boost: default_speaker_boost(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.elevenlabs.io/v1").expect("default TTS URL is valid")
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_owned()
}

fn default_output_format() -> String {
    "mp3_44100_128".to_owned()
}

fn default_voice_id() -> String {
    "JBFqnCBsd6RMkjVDRZzb".to_owned()
}

fn default_voices() -> IndexMap<String, String> {
    [
        ("elder-male", "pqHfZKP75CvOlQylNhV4"),
        ("elder-female", "XrExE9yKIg1WjnnlVkGX"),
        ("young-male", "TX3LPaxmHKxFdv7VOQHJ"),
        ("young-female", "EXAVITQu4vr4xnJW9Y5Y"),
    ]
    .into_iter()
    .map(|(preset, voice)| (preset.to_owned(), voice.to_owned()))
    .collect()
}

const fn default_stability() -> f64 {
    0.5
}

const fn default_similarity_boost() -> f64 {
    0.75
}

const fn default_style() -> f64 {
    0.3
}

const fn default_speaker_boost() -> bool {
    true
}
