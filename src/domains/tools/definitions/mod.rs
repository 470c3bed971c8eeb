//! Tool definitions module.
//!
//! One file per tool, grouped by the CoinGecko endpoint family they use.

pub mod coins;
pub mod common;
pub mod companies;
pub mod ping;
pub mod simple;

pub use coins::{
    CoinHistoricalChartParams, CoinOhlcChartParams, GetCoinHistoricalChartTool,
    GetCoinOhlcChartTool, OhlcDays,
};
pub use companies::{GetPublicCompaniesHoldingsTool, PublicCompaniesHoldingsParams, TreasuryCoin};
pub use ping::CheckApiStatusTool;
pub use simple::{CoinPriceParams, GetCoinPriceTool, GetSupportedCurrenciesTool};
