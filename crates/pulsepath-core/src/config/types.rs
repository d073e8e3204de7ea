use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub places: PlacesConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// The sentiment microservice sits on the private network, so it needs no key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default = "default_sentiment_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_sentiment_url() -> String {
    "http://localhost:6000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            base_url: default_sentiment_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_chat_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default)]
    pub reply_format: ReplyFormat,
    #[serde(default = "default_chat_timeout")]
    pub timeout_secs: u64,
}

fn default_chat_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_system_prompt() -> String {
    "You are a licensed physician.".to_string()
}

fn default_chat_timeout() -> u64 {
    60
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_chat_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            reply_format: ReplyFormat::default(),
            timeout_secs: default_chat_timeout(),
        }
    }
}

/// How the doctor-advice reply is pulled out of the first completion choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    /// Only `message.content`.
    #[default]
    Content,
    /// The whole message rendered as `{role=..., content=...}`.
    Message,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacesConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_places_url")]
    pub base_url: String,
    #[serde(default = "default_place_type")]
    pub place_type: String,
    #[serde(default = "default_radius")]
    pub default_radius: u32,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_places_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_place_type() -> String {
    "hospital".to_string()
}

fn default_radius() -> u32 {
    5000
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_places_url(),
            place_type: default_place_type(),
            default_radius: default_radius(),
            timeout_secs: default_timeout(),
        }
    }
}
