//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! error handling, configuration, the upstream client, session lifecycle
//! management and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod transport;
pub mod upstream;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use session::SessionFactory;
pub use transport::{TransportConfig, TransportService};
pub use upstream::{CoinGeckoClient, UpstreamError, UpstreamRequest};
