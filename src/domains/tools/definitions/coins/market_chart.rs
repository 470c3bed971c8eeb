//! Historical market chart tool.

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

/// Data points are always requested at daily granularity.
const INTERVAL: &str = "daily";

/// Parameters for the historical chart.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoinHistoricalChartParams {
    /// CoinGecko coin id.
    #[schemars(description = "Coin id, e.g. 'bitcoin'")]
    pub id: String,

    /// Number of days back from now, or 'max'.
    #[schemars(description = "Data up to this many days ago, e.g. '1', '30', 'max'")]
    pub days: String,

    /// Quote currency (default: usd).
    #[schemars(description = "Target currency (default: 'usd')")]
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    /// Decimal places for price values.
    #[schemars(description = "Decimal places for price values, e.g. '2' or 'full'")]
    pub precision: Option<String>,
}

/// Daily price, market cap and volume history of a coin.
#[derive(Debug, Clone)]
pub struct GetCoinHistoricalChartTool;

impl GetCoinHistoricalChartTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getCoinHistoricalChart";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get historical daily price, market cap and 24h \
        volume data for a coin over the given number of days.";

    const ERROR_LABEL: &'static str = "Failed to fetch historical chart data";

    /// Upstream request for the given parameters.
    pub fn request(params: &CoinHistoricalChartParams) -> UpstreamRequest {
        UpstreamRequest::new(["coins", params.id.as_str(), "market_chart"])
            .query("vs_currency", params.vs_currency.as_str())
            .query("days", params.days.as_str())
            .query("interval", INTERVAL)
            .optional_query("precision", params.precision.as_deref())
    }

    /// Fetch the chart.
    #[instrument(skip(client))]
    pub async fn execute(
        client: &CoinGeckoClient,
        params: CoinHistoricalChartParams,
    ) -> CallToolResult {
        info!("Fetching historical chart for {}", params.id);
        let request = Self::request(&params);
        relay(Self::ERROR_LABEL, client.fetch(&request)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<CoinHistoricalChartParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: CoinHistoricalChartParams = parse_params(args)?;
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
