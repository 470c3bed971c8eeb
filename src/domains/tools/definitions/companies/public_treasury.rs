//! Public companies treasury holdings tool.

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
use crate::domains::tools::definitions::common::{parse_params, relay, tool_model};

/// Coins CoinGecko tracks corporate treasuries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TreasuryCoin {
    Bitcoin,
    Ethereum,
}

impl TreasuryCoin {
    /// Coin id as used in the upstream path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
        }
    }
}

/// Parameters for the holdings lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PublicCompaniesHoldingsParams {
    /// Which coin's holdings to list.
    #[schemars(description = "Coin id: 'bitcoin' or 'ethereum'")]
    pub coin_id: TreasuryCoin,
}

/// Holdings of public companies in bitcoin or ethereum.
#[derive(Debug, Clone)]
pub struct GetPublicCompaniesHoldingsTool;

impl GetPublicCompaniesHoldingsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getPublicCompaniesHoldings";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get bitcoin or ethereum holdings of publicly traded \
        companies, sorted by total holdings.";

    const ERROR_LABEL: &'static str = "Failed to fetch public companies holdings";

    /// Upstream request for the given parameters.
    pub fn request(params: &PublicCompaniesHoldingsParams) -> UpstreamRequest {
        UpstreamRequest::new(["companies", "public_treasury", params.coin_id.as_str()])
    }

    /// Fetch the holdings.
    #[instrument(skip(client))]
    pub async fn execute(
        client: &CoinGeckoClient,
        params: PublicCompaniesHoldingsParams,
    ) -> CallToolResult {
        info!("Fetching public treasury holdings for {}", params.coin_id.as_str());
        let request = Self::request(&params);
        relay(Self::ERROR_LABEL, client.fetch(&request)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<PublicCompaniesHoldingsParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: PublicCompaniesHoldingsParams = parse_params(args)?;
                Ok(Self::execute(&client, params).await)
            }
            .boxed()
        })
    }
}
