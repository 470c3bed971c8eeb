//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: Streamable HTTP with a stateful streaming endpoint and a
//!   stateless request/response endpoint - feature: `http`
//! - **STDIO**: Standard input/output, one session per process - feature: `stdio`
//!
//! Each transport obtains sessions from a [`SessionFactory`] and leaves the
//! protocol handling to rmcp.
//!
//! [`SessionFactory`]: crate::core::SessionFactory

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
