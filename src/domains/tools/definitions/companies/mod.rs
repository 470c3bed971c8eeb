//! Tools backed by CoinGecko's `/companies` endpoints.

pub mod public_treasury;

pub use public_treasury::{
    GetPublicCompaniesHoldingsTool, PublicCompaniesHoldingsParams, TreasuryCoin,
};
