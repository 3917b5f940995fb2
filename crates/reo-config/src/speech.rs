use serde::Deserialize;

/// Speech endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Route path of the synthesis endpoint
    #[serde(default = "default_path")]
    pub path: String,
    /// Maximum source text length in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    /// Optional limit applied to the translated text before synthesis
    ///
    /// Unset by default: translated text is forwarded as returned.
    #[serde(default)]
    pub max_translated_chars: Option<usize>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_text_chars: default_max_text_chars(),
            max_translated_chars: None,
        }
    }
}

fn default_path() -> String {
    "/functions/v1/synthesize-speech".to_owned()
}

const fn default_max_text_chars() -> usize {
    5000
}
