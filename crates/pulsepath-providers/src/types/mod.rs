mod request;
mod response;

pub use request::{ChatMessage, CompletionRequest, PlacesQuery, Role, SentimentRequest};
pub use response::{Choice, CompletionResponse, RelayedResponse, ResponseMessage};
