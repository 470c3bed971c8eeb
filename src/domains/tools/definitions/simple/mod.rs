//! Tools backed by CoinGecko's `/simple` endpoints.

pub mod price;
pub mod supported_currencies;

pub use price::{CoinPriceParams, GetCoinPriceTool};
pub use supported_currencies::GetSupportedCurrenciesTool;
