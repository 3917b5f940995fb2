use std::str::FromStr;

use indexmap::IndexMap;
use reo_config::TtsConfig;

use crate::TtsError;

/// Named voice styles offered to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum VoicePreset {
    ElderMale,
    ElderFemale,
    YoungMale,
    YoungFemale,
}

impl VoicePreset {
    /// Preset tokens accepted from callers
    pub const fn names() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }
}

/// Maps voice presets to vendor voice identifiers
#[derive(Debug, Clone)]
pub struct VoiceTable {
    voices: IndexMap<VoicePreset, String>,
    default_voice: String,
}

impl VoiceTable {
    /// Build the table from configuration
    ///
    /// Presets absent from the configured table use the default voice.
    pub fn from_config(config: &TtsConfig) -> crate::Result<Self> {
        let voices = config
            .voices
            .iter()
            .map(|(name, voice_id)| {
                VoicePreset::from_str(name)
                    .map(|preset| (preset, voice_id.clone()))
                    .map_err(|_| {
                        TtsError::ConfigError(format!(
                            "unknown voice preset `{name}` in tts.voices, expected one of: {}",
                            VoicePreset::names().join(", ")
                        ))
                    })
            })
            .collect::<crate::Result<IndexMap<_, _>>>()?;

        Ok(Self {
            voices,
            default_voice: config.default_voice_id.clone(),
        })
    }

    /// Vendor voice id for a preset, falling back to the default voice
    pub fn voice_id(&self, preset: Option<VoicePreset>) -> &str {
        preset
            .and_then(|preset| self.voices.get(&preset))
            .map_or(self.default_voice.as_str(), String::as_str)
    }
}
