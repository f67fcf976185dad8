//! DCP UI CLI
//!
//! Command-line interface for the DCP station manager web host.

use std::path::PathBuf;

use clap::Parser;
use dcp_ui::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "dcp-ui")]
#[command(about = "Web host for the DCP station manager")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the DCP API server (overrides config file)
    #[arg(short, long)]
    upstream: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, upstream={:?}, log_level={:?}",
        args.config,
        args.port,
        args.upstream,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(upstream) = args.upstream {
        config.upstream.base_url = upstream;
    }

    tracing::info!("Starting DCP UI");
    dcp_ui::run(config).await?;

    Ok(())
}
