use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {provider} - {message}")]
    Transport {
        provider: String,
        message: String,
        timed_out: bool,
    },

    #[error("Upstream error: {provider} returned {status}: {body}")]
    Upstream {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

impl ProviderError {
    pub fn transport(provider: impl Into<String>, err: &reqwest::Error) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }

    pub fn upstream(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn malformed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Machine-readable reason code surfaced to HTTP callers.
    pub fn reason(&self) -> &'static str {
        match self {
            ProviderError::Transport { timed_out: true, .. } => "upstream_timeout",
            ProviderError::Transport { .. } => "upstream_unavailable",
            ProviderError::Upstream { .. } => "upstream_rejected",
            ProviderError::MalformedResponse { .. } => "malformed_response",
            ProviderError::Config(_) => "provider_misconfigured",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Transport { timed_out: true, .. })
    }

    pub fn provider(&self) -> Option<&str> {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Upstream { provider, .. }
            | ProviderError::MalformedResponse { provider, .. } => Some(provider),
            ProviderError::Config(_) => None,
        }
    }
}

impl From<pulsepath_core::Error> for ProviderError {
    fn from(err: pulsepath_core::Error) -> Self {
        Self::Config(err.to_string())
    }
}
