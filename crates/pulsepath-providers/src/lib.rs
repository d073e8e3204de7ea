pub mod error;
pub mod providers;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ProviderError, Result};
pub use providers::{build_http_client, SentimentClient};
pub use traits::{ChatCompleter, PlacesSearcher, SentimentAnalyzer};
pub use types::{
    ChatMessage, CompletionRequest, CompletionResponse, PlacesQuery, RelayedResponse, Role,
    SentimentRequest,
};

#[cfg(feature = "openai")]
pub use providers::OpenAiChatClient;

#[cfg(feature = "google-places")]
pub use providers::PlacesClient;

pub mod prelude {
    pub use crate::error::{ProviderError, Result};
    pub use crate::traits::{ChatCompleter, PlacesSearcher, SentimentAnalyzer};
    pub use crate::types::{PlacesQuery, RelayedResponse};

    #[cfg(feature = "openai")]
    pub use crate::providers::OpenAiChatClient;

    #[cfg(feature = "google-places")]
    pub use crate::providers::PlacesClient;

    pub use crate::providers::SentimentClient;
}
