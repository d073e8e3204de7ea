pub mod config;
pub mod error;

pub use config::{
    ChatConfig, Config, GeneralConfig, LogLevel, PlacesConfig, ReplyFormat, SentimentConfig,
    ServerSection,
};
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::config::{Config, LogLevel, ReplyFormat};
    pub use crate::error::{Error, Result};
}
