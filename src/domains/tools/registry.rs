//! Tool Registry - the constant table of tools and their registration.
//!
//! Tool definitions are process-wide constants: names, descriptions and
//! cached schemas never change. Every session registers the same table onto
//! its own router, bound to the shared upstream client.

use std::collections::HashSet;
use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::Tool;

use crate::core::upstream::CoinGeckoClient;

use super::ToolError;
use super::definitions::{
    CheckApiStatusTool, GetCoinHistoricalChartTool, GetCoinOhlcChartTool, GetCoinPriceTool,
    GetPublicCompaniesHoldingsTool, GetSupportedCurrenciesTool,
};

/// Tool registry - the set of all tool definitions.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetSupportedCurrenciesTool::NAME,
            GetCoinPriceTool::NAME,
            GetPublicCompaniesHoldingsTool::NAME,
            GetCoinHistoricalChartTool::NAME,
            GetCoinOhlcChartTool::NAME,
            CheckApiStatusTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetSupportedCurrenciesTool::to_tool(),
            GetCoinPriceTool::to_tool(),
            GetPublicCompaniesHoldingsTool::to_tool(),
            GetCoinHistoricalChartTool::to_tool(),
            GetCoinOhlcChartTool::to_tool(),
            CheckApiStatusTool::to_tool(),
        ]
    }

    /// Fail if two definitions share a name.
    pub fn ensure_unique_names() -> Result<(), ToolError> {
        let mut seen = HashSet::new();
        for name in Self::tool_names() {
            if !seen.insert(name) {
                return Err(ToolError::duplicate(name));
            }
        }
        Ok(())
    }

    /// Attach every tool to `router`, in a fixed order.
    ///
    /// Registering twice replaces routes with identical ones.
    pub fn register_all<S>(router: ToolRouter<S>, client: Arc<CoinGeckoClient>) -> ToolRouter<S>
    where
        S: Send + Sync + 'static,
    {
        router
            .with_route(GetSupportedCurrenciesTool::create_route(client.clone()))
            .with_route(GetCoinPriceTool::create_route(client.clone()))
            .with_route(GetPublicCompaniesHoldingsTool::create_route(client.clone()))
            .with_route(GetCoinHistoricalChartTool::create_route(client.clone()))
            .with_route(GetCoinOhlcChartTool::create_route(client.clone()))
            .with_route(CheckApiStatusTool::create_route(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"getSupportedCurrencies"));
        assert!(names.contains(&"getCoinPrice"));
        assert!(names.contains(&"getPublicCompaniesHoldings"));
        assert!(names.contains(&"getCoinHistoricalChart"));
        assert!(names.contains(&"getCoinOHLCChart"));
        assert!(names.contains(&"checkApiStatus"));
    }

    #[test]
    fn test_names_are_unique() {
        assert!(ToolRegistry::ensure_unique_names().is_ok());
    }

    #[test]
    fn test_tool_models_match_names() {
        let models: Vec<String> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(models, ToolRegistry::tool_names());
    }

    #[test]
    fn test_every_tool_has_description_and_object_schema() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some_and(|d| !d.is_empty()), "{}", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{}",
                tool.name
            );
        }
    }
}
