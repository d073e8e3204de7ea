use super::{build_http_client, dispatch, join_url};
use crate::error::Result;
use crate::traits::SentimentAnalyzer;
use crate::types::{RelayedResponse, SentimentRequest};
use async_trait::async_trait;
use pulsepath_core::SentimentConfig;
use reqwest::Client;
use std::time::Duration;

const PROVIDER: &str = "sentiment";

pub struct SentimentClient {
    client: Client,
    base_url: String,
}

impl SentimentClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &SentimentConfig) -> Result<Self> {
        let client = build_http_client(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, "sentiment")
    }
}

#[async_trait]
impl SentimentAnalyzer for SentimentClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn analyze(&self, text: &str) -> Result<RelayedResponse> {
        let url = self.endpoint();
        tracing::debug!(provider = PROVIDER, %url, "POST sentiment");

        let request = self.client.post(&url).json(&SentimentRequest::new(text));
        dispatch(PROVIDER, request).await
    }
}
