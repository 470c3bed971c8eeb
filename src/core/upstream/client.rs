//! CoinGecko HTTP client.

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{UpstreamError, UpstreamRequest, UpstreamResult};
use crate::core::config::UpstreamConfig;

/// Stateless client for the CoinGecko REST API.
///
/// Holds only immutable settings and a connection pool, so a single instance
/// is shared by every session behind an `Arc`.
#[derive(Clone)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: Url,
    api_key_header: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key_header", &self.api_key_header)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CoinGeckoClient {
    /// Create a client for the configured base URL.
    ///
    /// An empty or missing key means the credential header is left off
    /// entirely; the provider decides whether to reject the request.
    pub fn new(config: &UpstreamConfig, api_key: Option<String>) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::invalid_base_url(&config.base_url, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::invalid_base_url(
                &config.base_url,
                "URL cannot be used as a base",
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::client(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key_header: config.api_key_header.clone(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    /// Whether a credential will be attached to outgoing requests.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the absolute URL for a request, without the query string.
    pub fn url_for(&self, request: &UpstreamRequest) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UpstreamError::invalid_base_url(self.base_url.as_str(), "URL cannot be a base")
            })?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }

    /// Issue one GET request and return the parsed JSON body unchanged.
    #[instrument(skip(self, request), fields(path = %request.path()))]
    pub async fn fetch(&self, request: &UpstreamRequest) -> UpstreamResult<Value> {
        let path = request.path();
        let url = self.url_for(request)?;
        debug!("GET {} {:?}", url, request.query_pairs());

        let mut builder = self.http.get(url).query(request.query_pairs());
        if let Some(key) = &self.api_key {
            builder = builder.header(self.api_key_header.as_str(), key.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(&path, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, path);
            return Err(UpstreamError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(&path, e))?;

        debug!("Upstream response received: {} bytes", bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode {
            path,
            message: e.to_string(),
        })
    }
}
