//! Simple price lookup tool.
//!
//! Prices can be requested by CoinGecko ids, by coin names or by ticker
//! symbols. None of the three is required here; CoinGecko rejects requests
//! that name no coin at all.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::upstream::{CoinGeckoClient, UpstreamRequest};
use crate::domains::tools::definitions::common::{
    default_vs_currency, parse_params, relay, tool_model,
};

/// Parameters for the price lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoinPriceParams {
    /// Comma-separated CoinGecko coin ids.
    #[schemars(description = "Comma-separated coin ids, e.g. 'bitcoin,ethereum'")]
    pub ids: Option<String>,

    /// Comma-separated coin names.
    #[schemars(description = "Comma-separated coin names, e.g. 'Bitcoin,Ethereum'")]
    pub names: Option<String>,

    /// Comma-separated ticker symbols.
    #[schemars(description = "Comma-separated coin symbols, e.g. 'btc,eth'")]
    pub symbols: Option<String>,

    /// Comma-separated quote currencies (default: usd).
    #[schemars(description = "Comma-separated target currencies (default: 'usd')")]
    #[serde(default = "default_vs_currency")]
    pub vs_currencies: String,
}

/// Current price of one or more coins.
#[derive(Debug, Clone)]
pub struct GetCoinPriceTool;

impl GetCoinPriceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getCoinPrice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current price of one or more coins, \
        identified by CoinGecko ids, names or symbols, in the given target currencies \
        (default: usd).";

    const ERROR_LABEL: &'static str = "Failed to fetch coin price";

    /// Upstream request for the given parameters.
    pub fn request(params: &CoinPriceParams) -> UpstreamRequest {
        UpstreamRequest::new(["simple", "price"])
            .optional_query("ids", params.ids.as_deref())
            .optional_query("names", params.names.as_deref())
            .optional_query("symbols", params.symbols.as_deref())
            .query("vs_currencies", params.vs_currencies.as_str())
    }

    /// Fetch the prices.
    #[instrument(skip(client))]
    pub async fn execute(client: &CoinGeckoClient, params: CoinPriceParams) -> CallToolResult {
        info!("Fetching coin price");
        let request = Self::request(&params);
        relay(Self::ERROR_LABEL, client.fetch(&request)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<CoinPriceParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: CoinPriceParams = parse_params(args)?;
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
