//! Tool Router - builds the rmcp ToolRouter for one session.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::upstream::CoinGeckoClient;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<CoinGeckoClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::register_all(ToolRouter::new(), client)
}
