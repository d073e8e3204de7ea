use super::types::{Config, LogLevel};
use crate::error::{Error, Result};
use std::path::Path;

const MASK: &str = "***";

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn load_default() -> Result<Self> {
        let paths = [
            "./pulsepath.toml",
            "~/.pulsepath/config.toml",
            "~/.config/pulsepath/config.toml",
            "/etc/pulsepath/config.toml",
        ];

        for path in &paths {
            let expanded = shellexpand::tilde(path);
            let path = Path::new(expanded.as_ref());
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        Ok(Config::default())
    }

    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Overlays values from `lookup`; values that fail to parse leave the field untouched.
    pub fn merge_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PULSEPATH_LOG_LEVEL").and_then(|l| LogLevel::parse(&l)) {
            self.general.log_level = level;
        }

        if let Some(host) = lookup("PULSEPATH_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PULSEPATH_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        if let Some(url) = lookup("AI_BASE_URL") {
            self.sentiment.base_url = url;
        }

        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.chat.api_key = Some(key);
        }

        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.chat.base_url = url;
        }

        if let Some(model) = lookup("OPENAI_MODEL") {
            self.chat.model = model;
        }

        if let Some(key) = lookup("GOOGLE_PLACES_KEY") {
            self.places.api_key = Some(key);
        }

        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_chat()?;
        self.validate_places()
    }

    pub fn validate_chat(&self) -> Result<()> {
        require_key(self.chat.api_key.as_deref(), "chat.api_key")
    }

    pub fn validate_places(&self) -> Result<()> {
        require_key(self.places.api_key.as_deref(), "places.api_key")
    }

    /// Copy with every secret replaced, safe to print or log.
    pub fn masked(&self) -> Self {
        let mut config = self.clone();
        if config.chat.api_key.is_some() {
            config.chat.api_key = Some(MASK.to_string());
        }
        if config.places.api_key.is_some() {
            config.places.api_key = Some(MASK.to_string());
        }
        config
    }
}

fn require_key(value: Option<&str>, name: &str) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::missing_config(name)),
    }
}
