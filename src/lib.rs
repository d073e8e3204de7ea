//! Backend facade for the pulsepath app.
//!
//! Four HTTP endpoints, each forwarding to at most one external provider:
//!
//! | Endpoint | Provider |
//! |---|---|
//! | `POST /api/chat/sentiment` | sentiment microservice (relayed) |
//! | `POST /api/chat/doctor` | OpenAI chat completions (`{reply}`) |
//! | `GET /api/clinics` | Google Places nearby search (relayed) |
//! | `GET /health` | none |

pub use pulsepath_core;
pub use pulsepath_providers;
pub use pulsepath_server;

pub mod prelude {
    pub use pulsepath_core::{Config, ReplyFormat};
    pub use pulsepath_providers::{
        ChatCompleter, OpenAiChatClient, PlacesClient, PlacesQuery, PlacesSearcher,
        ProviderError, RelayedResponse, SentimentAnalyzer, SentimentClient,
    };
    pub use pulsepath_server::{shutdown_signal, AppState, Server, ServerConfig, ServerError};
}
