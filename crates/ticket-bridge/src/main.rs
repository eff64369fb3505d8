use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use ticket_bridge::config::{BridgeConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(
    name = "ticket-bridge",
    about = "Webhook relay — validates the bridge token and echoes JSON payloads",
    version
)]
struct Cli {
    /// Config file (YAML, optional `bridge_token`)
    #[arg(long, env = "TICKET_BRIDGE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = BridgeConfig::load(&cli.config).context("failed to load bridge config")?;
    if config.token().is_none() {
        tracing::warn!("no bridge_token configured; /webhook accepts unauthenticated requests");
    }
    ticket_bridge::serve(config, &cli.host, cli.port).await
}
