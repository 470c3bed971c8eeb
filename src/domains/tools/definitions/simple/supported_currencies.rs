//! Supported quote currencies tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use crate::core::upstream::{CoinGeckoClient, UpstreamRequest};
use crate::domains::tools::definitions::common::{NoParams, parse_params, relay, tool_model};

/// Lists every currency CoinGecko can quote prices in.
#[derive(Debug, Clone)]
pub struct GetSupportedCurrenciesTool;

impl GetSupportedCurrenciesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getSupportedCurrencies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the list of currencies supported as quote currencies \
        (vs_currencies) by CoinGecko, e.g. usd, eur, btc.";

    const ERROR_LABEL: &'static str = "Failed to fetch supported currencies";

    /// Upstream request for this tool.
    pub fn request(_params: &NoParams) -> UpstreamRequest {
        UpstreamRequest::new(["simple", "supported_vs_currencies"])
    }

    /// Fetch the currency list.
    pub async fn execute(client: &CoinGeckoClient, params: NoParams) -> CallToolResult {
        info!("Fetching supported vs currencies");
        let request = Self::request(&params);
        relay(Self::ERROR_LABEL, client.fetch(&request)).await
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
