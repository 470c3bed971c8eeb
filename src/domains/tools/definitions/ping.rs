//! API status check tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use crate::core::upstream::{CoinGeckoClient, UpstreamRequest};
use crate::domains::tools::definitions::common::{NoParams, parse_params, relay_with, tool_model};

/// Text returned when the ping succeeds. The upstream body is discarded.
pub const API_RUNNING: &str = "API is running";

/// Checks that the CoinGecko API is reachable.
#[derive(Debug, Clone)]
pub struct CheckApiStatusTool;

impl CheckApiStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "checkApiStatus";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check whether the CoinGecko API is up and reachable.";

    const ERROR_LABEL: &'static str = "Failed to check API status";

    /// Upstream request for this tool.
    pub fn request(_params: &NoParams) -> UpstreamRequest {
        UpstreamRequest::new(["ping"])
    }

    /// Ping the API.
    pub async fn execute(client: &CoinGeckoClient, params: NoParams) -> CallToolResult {
        info!("Checking CoinGecko API status");
        let request = Self::request(&params);
        relay_with(Self::ERROR_LABEL, client.fetch(&request), |_| {
            API_RUNNING.to_string()
        })
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute bound to the shared client.
    pub fn create_route<S>(client: Arc<CoinGeckoClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: NoParams = parse_params(args)?;
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
