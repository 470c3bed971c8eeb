//! CoinGecko MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the configured
//! transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use coingecko_mcp_server::core::{Config, SessionFactory, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so configuration warnings are visible
    init_logging(&log_level_from_env());

    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let factory = SessionFactory::new(config)?;

    info!("Session factory initialized");

    transport.run(factory).await?;

    info!("Server shutting down");

    Ok(())
}

/// Log level from `MCP_LOG_LEVEL`, read ahead of the full configuration.
fn log_level_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| Config::default().logging.level)
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the STDIO transport keeps stdout to itself.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
