//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that wraps the errors of every
//! layer: tool registration, the upstream client and the transports.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the upstream client.
    #[error("Upstream error: {0}")]
    Upstream(#[from] super::upstream::UpstreamError),

    /// Error originating from a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
