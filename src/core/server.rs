//! MCP server handler.
//!
//! One [`McpServer`] value is one session: it owns a tool router with every
//! tool registered and shares the upstream client with its siblings.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (serde + schemars)
//! - `request()` building the upstream request from validated params
//! - `execute()` relaying the request through the shared envelope
//! - `create_route()` binding it into a router
//!
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::session::SessionGuard;
use super::upstream::CoinGeckoClient;
use crate::domains::tools::build_tool_router;

/// Server instructions reported to clients during initialization.
const INSTRUCTIONS: &str = "Cryptocurrency market data from CoinGecko. \
    Tools return the raw CoinGecko JSON as text; upstream failures come back \
    as a JSON object with an \"error\" field.";

/// The MCP server handler for a single session.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,

    /// Released when the last clone of this session is dropped.
    session: Arc<SessionGuard>,
}

impl McpServer {
    /// Create a session. Use [`super::SessionFactory::create`] outside tests.
    pub(crate) fn new(
        config: Arc<Config>,
        client: Arc<CoinGeckoClient>,
        session: SessionGuard,
    ) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(client),
            config,
            session: Arc::new(session),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Sequence number of this session.
    pub fn session_id(&self) -> u64 {
        self.session.id()
    }

    /// Names of the tools registered on this session, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        names
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
