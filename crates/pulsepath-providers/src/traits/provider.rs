use crate::error::Result;
use crate::types::{PlacesQuery, RelayedResponse};
use async_trait::async_trait;

/// Relays text to the sentiment microservice.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    async fn analyze(&self, text: &str) -> Result<RelayedResponse>;
}

/// Single-turn chat completion behind a fixed system instruction.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    async fn chat(&self, prompt: &str) -> Result<String>;
}

/// Nearby search; the provider's JSON comes back verbatim.
#[async_trait]
pub trait PlacesSearcher: Send + Sync {
    fn name(&self) -> &str;

    async fn nearby(&self, query: &PlacesQuery) -> Result<String>;
}
