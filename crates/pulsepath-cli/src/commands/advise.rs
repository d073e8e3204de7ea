use pulsepath_core::Config;
use pulsepath_providers::{ChatCompleter, OpenAiChatClient};

use super::fail;

pub async fn run(config: &Config, text: &str) -> anyhow::Result<()> {
    config.validate_chat()?;
    let client = OpenAiChatClient::from_config(&config.chat)?;

    match client.chat(text).await {
        Ok(reply) => println!("{}", reply),
        Err(e) => fail(e),
    }

    Ok(())
}
