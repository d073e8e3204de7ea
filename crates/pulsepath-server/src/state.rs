use pulsepath_core::Config;
use pulsepath_providers::{
    ChatCompleter, OpenAiChatClient, PlacesClient, PlacesSearcher, ProviderError,
    SentimentAnalyzer, SentimentClient,
};
use std::sync::Arc;

/// One shared client per provider. Handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub chat: Arc<dyn ChatCompleter>,
    pub places: Arc<dyn PlacesSearcher>,
}

impl AppState {
    pub fn new(
        sentiment: Arc<dyn SentimentAnalyzer>,
        chat: Arc<dyn ChatCompleter>,
        places: Arc<dyn PlacesSearcher>,
    ) -> Self {
        Self {
            sentiment,
            chat,
            places,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let sentiment = SentimentClient::from_config(&config.sentiment)?;
        let chat = OpenAiChatClient::from_config(&config.chat)?;
        let places = PlacesClient::from_config(&config.places)?;

        Ok(Self::new(Arc::new(sentiment), Arc::new(chat), Arc::new(places)))
    }
}
