#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Translation of source text into a supported minority or endangered language

mod chat;
mod error;
mod language;
mod prompt;

use async_trait::async_trait;

pub use chat::ChatTranslator;
pub use error::{Result, TranslateError};
pub use language::Language;

/// Translates free text into a target language
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `language`, returning the trimmed result
    async fn translate(&self, text: &str, language: Language) -> Result<String>;
}
