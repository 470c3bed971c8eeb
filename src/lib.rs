//! CoinGecko MCP Server Library
//!
//! Exposes CoinGecko market-data lookups as Model Context Protocol tools.
//! Each tool validates its parameters, forwards one request to the
//! CoinGecko API and returns the response body as text.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the upstream client, session lifecycle,
//!   the MCP server handler and the transports
//! - **domains**: the tool definitions, their registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use coingecko_mcp_server::core::{Config, SessionFactory, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let factory = SessionFactory::new(config)?;
//!     transport.run(factory).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, SessionFactory};
