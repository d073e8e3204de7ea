use clap::{Parser, Subcommand};
use pulsepath_core::LogLevel;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pulsepath")]
#[command(author, version, about = "pulsepath backend facade", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "PULSEPATH_CONFIG")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Ask the chat provider for doctor advice and exit
    Advise {
        /// Symptom description sent as the user message
        text: String,
    },
    /// Relay text to the sentiment service and print its answer
    Sentiment {
        text: String,
    },
    /// Search for hospitals near a coordinate
    Clinics {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in meters
        #[arg(short, long)]
        radius: Option<u32>,
    },
    /// Print the effective configuration with secrets masked
    Config,
}

fn init_tracing(verbose: u8, configured: LogLevel) {
    let level = match verbose {
        0 => configured.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.general.log_level);

    match cli.command {
        Commands::Serve { host, port } => {
            commands::serve::run(config, host, port).await?;
        }
        Commands::Advise { text } => {
            commands::advise::run(&config, &text).await?;
        }
        Commands::Sentiment { text } => {
            commands::sentiment::run(&config, &text).await?;
        }
        Commands::Clinics { lat, lng, radius } => {
            commands::clinics::run(&config, lat, lng, radius).await?;
        }
        Commands::Config => {
            commands::config::run(&config)?;
        }
    }

    Ok(())
}
