//! In-process stand-in for the CoinGecko API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

use super::CoinGeckoClient;
use crate::core::config::UpstreamConfig;

/// How the mock answers every GET.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    /// Reflect path, query pairs and credential header back as JSON.
    Echo,
    /// Return this body with 200.
    Fixed(Value),
    /// Return this status with a plain-text body.
    Status(u16),
    /// Return 200 with a body that is not JSON.
    Malformed,
}

struct MockState {
    reply: Reply,
    hits: AtomicUsize,
}

/// A mock upstream bound to an ephemeral local port.
pub(crate) struct MockUpstream {
    base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    pub(crate) async fn spawn(reply: Reply) -> Self {
        let state = Arc::new(MockState {
            reply,
            hits: AtomicUsize::new(0),
        });
        let app = Router::new().fallback(respond).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests served so far.
    pub(crate) fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub(crate) fn client(&self, api_key: Option<&str>) -> CoinGeckoClient {
        client_for(self.base_url(), api_key)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A client pointed at a port nothing listens on.
pub(crate) fn closed_port_client() -> CoinGeckoClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    drop(listener);
    client_for(&format!("http://{addr}"), None)
}

fn client_for(base_url: &str, api_key: Option<&str>) -> CoinGeckoClient {
    let config = UpstreamConfig {
        base_url: base_url.to_string(),
        ..UpstreamConfig::default()
    };
    CoinGeckoClient::new(&config, api_key.map(str::to_string)).expect("client")
}

async fn respond(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match &state.reply {
        Reply::Echo => {
            let query: Vec<(String, String)> =
                serde_urlencoded::from_str(uri.query().unwrap_or("")).unwrap_or_default();
            let api_key = headers
                .get(UpstreamConfig::default().api_key_header.as_str())
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({
                "path": uri.path(),
                "query": query,
                "api_key": api_key,
            }))
            .into_response()
        }
        Reply::Fixed(body) => Json(body.clone()).into_response(),
        Reply::Status(code) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "upstream failure",
        )
            .into_response(),
        Reply::Malformed => (StatusCode::OK, "<html>not json</html>").into_response(),
    }
}
