use pulsepath_core::Config;
use pulsepath_providers::{SentimentAnalyzer, SentimentClient};

use super::fail;

pub async fn run(config: &Config, text: &str) -> anyhow::Result<()> {
    let client = SentimentClient::from_config(&config.sentiment)?;

    match client.analyze(text).await {
        Ok(relayed) => println!("{}", relayed.body),
        Err(e) => fail(e),
    }

    Ok(())
}
