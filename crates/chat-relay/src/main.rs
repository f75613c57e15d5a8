use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::llm::{HuggingFaceProvider, ModelRegistry};
use chat_relay::server::{self, AppState};

#[derive(Parser)]
#[command(name = "chat-relay", version, about)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "chat-relay.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)
        .await
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let models = ModelRegistry::new(&config.provider.base_url)
        .with_context(|| format!("invalid provider base URL: {}", config.provider.base_url))?;
    info!(models = ?models.keys().collect::<Vec<_>>(), "Loaded model registry");

    let mut client = reqwest::Client::builder();
    if let Some(secs) = config.provider.timeout_seconds {
        client = client.timeout(Duration::from_secs(secs));
    }
    let client = client.build().context("failed to build HTTP client")?;

    let api_key = config.provider.api_key();
    if api_key.is_none() {
        warn!(
            "No provider credential found. Set {} to authenticate inference requests.",
            config.provider.api_key_env
        );
    }
    let provider = HuggingFaceProvider::new(client, api_key);

    let state = AppState::new(models, Arc::new(provider), &config.server);
    if config.server.cors_allowed_origins.is_empty() {
        warn!("CORS allows any origin; set server.cors_allowed_origins to restrict it");
    }
    let app = server::build_app(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("Chat relay listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Chat relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
