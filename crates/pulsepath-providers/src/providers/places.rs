use super::{build_http_client, dispatch, join_url};
use crate::error::{ProviderError, Result};
use crate::traits::PlacesSearcher;
use crate::types::PlacesQuery;
use async_trait::async_trait;
use pulsepath_core::PlacesConfig;
use reqwest::Client;
use std::time::Duration;
use url::form_urlencoded::byte_serialize;

const PROVIDER: &str = "places";
const REDACTED: &str = "***";

pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
    place_type: String,
    default_radius: u32,
}

impl PlacesClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        let defaults = PlacesConfig::default();
        Self {
            client,
            api_key: api_key.into(),
            base_url: defaults.base_url,
            place_type: defaults.place_type,
            default_radius: defaults.default_radius,
        }
    }

    pub fn from_config(config: &PlacesConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::config("places.api_key is not set"))?;
        let client = build_http_client(Duration::from_secs(config.timeout_secs))?;

        Ok(Self::new(client, api_key)
            .with_base_url(config.base_url.clone())
            .with_place_type(config.place_type.clone())
            .with_default_radius(config.default_radius))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = place_type.into();
        self
    }

    pub fn with_default_radius(mut self, radius: u32) -> Self {
        self.default_radius = radius;
        self
    }

    pub fn search_url(&self, query: &PlacesQuery) -> String {
        self.format_url(query, &self.api_key)
    }

    fn redacted_url(&self, query: &PlacesQuery) -> String {
        self.format_url(query, REDACTED)
    }

    // Coordinates use fixed six-decimal notation; `{:.6}` never switches to exponent form.
    fn format_url(&self, query: &PlacesQuery, key: &str) -> String {
        format!(
            "{}?location={:.6},{:.6}&radius={}&type={}&key={}",
            join_url(&self.base_url, "nearbysearch/json"),
            query.lat,
            query.lng,
            query.radius.unwrap_or(self.default_radius),
            encode(&self.place_type),
            encode(key),
        )
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[async_trait]
impl PlacesSearcher for PlacesClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn nearby(&self, query: &PlacesQuery) -> Result<String> {
        tracing::debug!(provider = PROVIDER, url = %self.redacted_url(query), "GET nearby search");

        let request = self.client.get(self.search_url(query));
        let relayed = dispatch(PROVIDER, request).await?;
        Ok(relayed.body)
    }
}
