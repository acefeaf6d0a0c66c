//! DOI Metadata Service - Entry Point
//!
//! Runs the HTTP service, or resolves DOIs once from the command line.

use std::net::{IpAddr, SocketAddr};

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use doi_metadata::{Config, lookup, server};

#[derive(Parser, Debug)]
#[command(name = "doi-metadata")]
#[command(about = "Resolve DOIs to bibliographic metadata via OpenAlex")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// OpenAlex API base URL
    #[arg(long, global = true, env = "OPENALEX_API_URL")]
    api_url: Option<String>,

    /// Contact address for the OpenAlex polite pool
    #[arg(long, global = true, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the metadata API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0", env = "HOST")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, default_value = "8000", env = "PORT")]
        port: u16,
    },
    /// Look up DOIs found in the given text and print the records as JSON
    Lookup {
        /// DOIs, DOI URLs, or any text containing them
        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so `lookup` output stays clean JSON.
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(ref api_url) = cli.api_url {
        config = config.with_api_url(api_url)?;
    }
    if let Some(ref mailto) = cli.mailto {
        config.mailto = Some(mailto.clone());
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting DOI metadata service");

    let config = build_config(&cli)?;

    match cli.command {
        Command::Serve { host, port } => {
            server::run_http(config, SocketAddr::new(host, port)).await?;
        }
        Command::Lookup { text } => {
            let response = lookup::lookup_text(&config, &text.join(" ")).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
