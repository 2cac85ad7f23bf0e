//! # Tanebi MCP Server
//!
//! Entry point for the MCP (Model Context Protocol) bridge to Tanebi.
//!
//! Reads configuration from environment variables:
//! - `TANEBI_API_KEY`: API key sent as `X-API-Key` (required)
//! - `TANEBI_API_BASE_URL`: Tanebi origin (default: `https://tanebi.app`)
//! - `TANEBI_LOG_FORMAT`: `json` for machine-parseable logs (default: text)
//!
//! Communicates with AI clients (Claude, GPT) via MCP over stdio,
//! and forwards requests to the Tanebi HTTP API.

mod client;
mod config;
mod server;

use client::TanebiClient;
use config::Config;
use rmcp::{ServiceExt, transport::stdio};
use server::TanebiMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Tanebi MCP server starting, target: {}", config.base_url);

    let client = TanebiClient::new(&config);
    let mcp = TanebiMcp::new(client);

    let service = match mcp.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("MCP serve error: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server terminated unexpectedly: {:?}", e);
        std::process::exit(1);
    }
}

/// Logging goes to stderr only. Stdout carries the MCP stdio transport.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tanebi_mcp=info".into());
    let json = std::env::var("TANEBI_LOG_FORMAT").is_ok_and(|f| f == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }
}
