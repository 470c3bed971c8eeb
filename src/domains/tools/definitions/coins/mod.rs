//! Tools backed by CoinGecko's `/coins/{id}` chart endpoints.

pub mod market_chart;
pub mod ohlc;

pub use market_chart::{CoinHistoricalChartParams, GetCoinHistoricalChartTool};
pub use ohlc::{CoinOhlcChartParams, GetCoinOhlcChartTool, OhlcDays};
