mod tui;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use prepplate_core::ai::{AiConfig, OpenRouterClient};

#[derive(Parser)]
#[command(name = "prepplate")]
#[command(about = "Pick your proteins, let the AI chef plan your week", long_about = None)]
struct Cli {
    /// Model name (overrides PREPPLATE_AI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// API base URL (overrides PREPPLATE_AI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land inside the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        AiConfig::from_env().context("set OPENROUTER_API_KEY to talk to the model endpoint")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = Arc::new(OpenRouterClient::new(config));
    tui::run(client).await
}
