#[cfg(feature = "openai")]
mod openai;
#[cfg(feature = "google-places")]
mod places;
mod sentiment;

#[cfg(feature = "openai")]
pub use openai::OpenAiChatClient;
#[cfg(feature = "google-places")]
pub use places::PlacesClient;
pub use sentiment::SentimentClient;

use crate::error::{ProviderError, Result};
use crate::types::RelayedResponse;
use reqwest::{header, Client, RequestBuilder};
use std::time::Duration;

/// One pooled client per provider; `reqwest::Client` is cheap to clone and safe to share.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pulsepath/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::config(format!("Failed to create HTTP client: {}", e)))
}

/// Sends `request` and reads the whole body. Non-2xx statuses become `Upstream`.
pub(crate) async fn dispatch(provider: &str, request: RequestBuilder) -> Result<RelayedResponse> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(provider, error = %e, "Outbound request failed");
        ProviderError::transport(provider, &e)
    })?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::transport(provider, &e))?;

    if !status.is_success() {
        tracing::warn!(provider, status = status.as_u16(), "Provider rejected request");
        return Err(ProviderError::upstream(provider, status.as_u16(), body));
    }

    let relayed = RelayedResponse::new(status.as_u16(), body);
    Ok(match content_type {
        Some(ct) => relayed.with_content_type(ct),
        None => relayed,
    })
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
