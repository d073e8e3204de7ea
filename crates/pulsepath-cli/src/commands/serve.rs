use colored::Colorize;
use pulsepath_core::Config;
use pulsepath_server::{shutdown_signal, AppState, Server, ServerConfig};

pub async fn run(config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    config.validate()?;

    let state = AppState::from_config(&config)?;

    let mut server_config = ServerConfig::from(&config.server);
    if let Some(host) = host {
        server_config = server_config.with_host(host);
    }
    if let Some(port) = port {
        server_config = server_config.with_port(port);
    }

    let addr = server_config.socket_addr()?;
    println!(
        "{} pulsepath listening on {}",
        "Starting".green().bold(),
        addr.to_string().cyan()
    );
    println!("  sentiment  -> {}", config.sentiment.base_url);
    println!("  chat model -> {}", config.chat.model);

    Server::new(server_config, state)
        .run_with_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
