//! OpenAI-compatible chat-completion translator

use async_trait::async_trait;
use reo_config::TranslationConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Language, Translator, error::TranslateError, prompt::system_instruction};

/// Translator backed by a hosted chat-completion endpoint
pub struct ChatTranslator {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
}

impl ChatTranslator {
    pub fn new(config: &TranslationConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("translation gateway key missing, speech requests will fail until configured");
        }

        Self {
            client: reo_core::http_client(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Trimmed content of the first choice, if any
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_owned())
            .filter(|content| !content.is_empty())
    }
}

#[async_trait]
impl Translator for ChatTranslator {
    async fn translate(&self, text: &str, language: Language) -> crate::Result<String> {
        let api_key = self.api_key.as_ref().ok_or(TranslateError::NotConfigured)?;

        let instruction = system_instruction(language);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        tracing::debug!(%language, model = %self.model, input_chars = text.chars().count(), "translation request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "translation request failed");
                TranslateError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(%status, body = %error_text, "translation gateway error");
            return Err(TranslateError::Upstream {
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "translation response could not be parsed");
            TranslateError::InvalidResponse(e.to_string())
        })?;

        let translated = parsed.into_text().ok_or_else(|| {
            tracing::error!(%language, "translation response had no content");
            TranslateError::EmptyResult
        })?;

        tracing::debug!(%language, output_chars = translated.chars().count(), "translation complete");

        Ok(translated)
    }
}
