mod provider;

pub use provider::{ChatCompleter, PlacesSearcher, SentimentAnalyzer};
