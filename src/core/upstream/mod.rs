//! Upstream market-data provider access.
//!
//! Every tool forwards exactly one GET request to the CoinGecko API through
//! [`CoinGeckoClient`]. Requests are described by [`UpstreamRequest`] values
//! derived from validated tool parameters, and failures of any kind come back
//! as an [`UpstreamError`] rather than a panic.

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use client::CoinGeckoClient;
pub use error::{UpstreamError, UpstreamResult};
pub use request::UpstreamRequest;
