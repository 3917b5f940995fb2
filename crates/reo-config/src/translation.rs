use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat-completion endpoint used for the translation step
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    /// Gateway API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// OpenAI-compatible gateway base URL; `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://openrouter.ai/api/v1").expect("default translation URL is valid")
}

fn default_model() -> String {
    "google/gemini-2.5-flash".to_owned()
}
