//! OHLC candle chart tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::upstream::{CoinGeckoClient, UpstreamRequest};
use crate::domains::tools::definitions::common::{
    default_vs_currency, parse_params, relay, tool_model,
};

/// Time ranges CoinGecko serves OHLC candles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum OhlcDays {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "14")]
    Fourteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "90")]
    Ninety,
    #[serde(rename = "180")]
    OneEighty,
    #[serde(rename = "365")]
    ThreeSixtyFive,
}

impl OhlcDays {
    /// Value as sent upstream.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Seven => "7",
            Self::Fourteen => "14",
            Self::Thirty => "30",
            Self::Ninety => "90",
            Self::OneEighty => "180",
            Self::ThreeSixtyFive => "365",
        }
    }
}

/// Parameters for the OHLC chart.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoinOhlcChartParams {
    /// CoinGecko coin id.
    #[schemars(description = "Coin id, e.g. 'bitcoin'")]
    pub id: String,

    /// Time range in days.
    #[schemars(description = "Data up to this many days ago: 1, 7, 14, 30, 90, 180 or 365")]
    pub days: OhlcDays,

    /// Quote currency (default: usd).
    #[schemars(description = "Target currency (default: 'usd')")]
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    /// Decimal places for price values.
    #[schemars(description = "Decimal places for price values, e.g. '2' or 'full'")]
    pub precision: Option<String>,
}

/// Open/high/low/close candles for a coin.
#[derive(Debug, Clone)]
pub struct GetCoinOhlcChartTool;

impl GetCoinOhlcChartTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getCoinOHLCChart";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get OHLC (open, high, low, close) candle data for a \
        coin. Candle width depends on the range: 30 minutes for 1-2 days, 4 hours for 3-30 \
        days, 4 days beyond that.";

    const ERROR_LABEL: &'static str = "Failed to fetch OHLC chart data";

    /// Upstream request for the given parameters.
    pub fn request(params: &CoinOhlcChartParams) -> UpstreamRequest {
        UpstreamRequest::new(["coins", params.id.as_str(), "ohlc"])
            .query("vs_currency", params.vs_currency.as_str())
            .query("days", params.days.as_str())
            .optional_query("precision", params.precision.as_deref())
    }

    /// Fetch the candles.
    #[instrument(skip(client))]
    pub async fn execute(client: &CoinGeckoClient, params: CoinOhlcChartParams) -> CallToolResult {
        info!("Fetching OHLC chart for {}", params.id);
        let request = Self::request(&params);
        relay(Self::ERROR_LABEL, client.fetch(&request)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<CoinOhlcChartParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: CoinOhlcChartParams = parse_params(args)?;
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
