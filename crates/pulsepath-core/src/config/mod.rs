mod loader;
mod types;

pub use types::{
    ChatConfig, Config, GeneralConfig, LogLevel, PlacesConfig, ReplyFormat, SentimentConfig,
    ServerSection,
};
