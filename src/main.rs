//! Telegram Bot API Relay
//!
//! A transparent relay in front of the Telegram Bot API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 RELAY                        │
//!                         │                                              │
//!     Client Request      │  ┌─────────┐    ┌────────────┐               │
//!     ────────────────────┼─▶│  http   │───▶│  handlers  │               │
//!                         │  │ server  │    │ (3 routes) │               │
//!                         │  └─────────┘    └─────┬──────┘               │
//!                         │                       │                      │
//!                         │        ┌──────────────┼────────────┐         │
//!                         │        ▼              ▼            │         │
//!                         │  ┌──────────┐   ┌──────────┐       │         │
//!     Client Response     │  │ webhook  │   │ upstream │       │         │
//!     ◀───────────────────┼──│  codec   │   │  client  │◀──────┼──── api.telegram.org
//!                         │  └──────────┘   └──────────┘       │         │
//!                         │                                    │         │
//!                         │  ┌──────────────────────────────┐  │         │
//!                         │  │   config │ error │ lifecycle │  │         │
//!                         │  └──────────────────────────────┘  │         │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! Routes:
//! - `ALL /webhook/{encoded}` — relay a webhook callback to a base64-encoded URL
//! - `ALL /bot{token}/{method}` — relay Bot API calls, rewriting `setWebhook`
//! - `GET /file/{token}/{*path}` — relay file downloads with attachment disposition

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telegram_relay::config::loader::load_config;
use telegram_relay::{HttpServer, RelayConfig, Shutdown};

#[derive(Parser)]
#[command(name = "telegram-relay")]
#[command(about = "Transparent relay for the Telegram Bot API", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telegram_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("telegram-relay v0.1.0 starting");

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => RelayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        webhook_relay_enabled = config.webhook.relay_enabled,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
