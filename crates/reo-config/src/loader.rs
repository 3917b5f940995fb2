use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Missing credentials are not validation errors; they surface per
    /// request as configuration failures.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_speech_config()?;
        self.validate_tts_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    fn validate_speech_config(&self) -> anyhow::Result<()> {
        if !self.speech.path.starts_with('/') {
            anyhow::bail!("speech.path must start with '/': `{}`", self.speech.path);
        }

        if self.speech.max_text_chars == 0 {
            anyhow::bail!("speech.max_text_chars must be greater than 0");
        }

        if self.speech.max_translated_chars == Some(0) {
            anyhow::bail!("speech.max_translated_chars must be greater than 0 when set");
        }

        if self.server.health.enabled && self.server.health.path == self.speech.path {
            anyhow::bail!("server.health.path and speech.path must differ");
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if !self.tts.output_format.starts_with("mp3") {
            anyhow::bail!(
                "tts.output_format must be an MPEG format (mp3_*), got `{}`",
                self.tts.output_format
            );
        }

        if self.tts.default_voice_id.trim().is_empty() {
            anyhow::bail!("tts.default_voice_id must not be empty");
        }

        let settings = &self.tts.voice_settings;
        for (name, value) in [
            ("stability", settings.stability),
            ("similarity_boost", settings.similarity_boost),
            ("style", settings.style),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("tts.voice_settings.{name} must be between 0.0 and 1.0, got {value}");
            }
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        if let Some(ref telemetry) = self.telemetry
            && !(0.0..=1.0).contains(&telemetry.sampling_rate)
        {
            anyhow::bail!(
                "telemetry.sampling_rate must be between 0.0 and 1.0, got {}",
                telemetry.sampling_rate
            );
        }

        Ok(())
    }
}
