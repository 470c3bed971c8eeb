//! HTTP transport implementation.
//!
//! Serves MCP over Streamable HTTP on two endpoints backed by rmcp's
//! `StreamableHttpService`:
//!
//! - the **streaming** endpoint runs in stateful mode. A client initializes
//!   once, receives an `Mcp-Session-Id`, keeps a long-lived SSE stream open
//!   with `GET` for server-initiated messages and posts its own messages with
//!   `POST`. The session lives until the client sends `DELETE` or goes away.
//! - the **stateless** endpoint creates a fresh session for every `POST`,
//!   answers that single request and drops the session. No session id is
//!   issued.
//!
//! Both endpoints draw their sessions from the same [`SessionFactory`].

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService,
    session::local::{LocalSessionManager, SessionConfig},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{McpServer, SessionFactory};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across the auxiliary HTTP handlers.
#[derive(Clone)]
struct AppState {
    factory: SessionFactory,
    config: Arc<HttpConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router with both MCP endpoints plus `/health` and `/`.
    pub fn router(&self, factory: SessionFactory) -> TransportResult<Router> {
        self.validate()?;

        let streaming = session_service(
            factory.clone(),
            true,
            Some(self.config.session_idle_timeout),
        );
        let stateless = session_service(factory.clone(), false, None);

        let state = AppState {
            factory,
            config: Arc::new(self.config.clone()),
        };

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .nest_service(&self.config.stream_path, streaming)
            .nest_service(&self.config.stateless_path, stateless)
            .layer(TraceLayer::new_for_http());

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any);
            app = app.layer(cors);
        }

        Ok(app)
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, factory: SessionFactory) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(factory)?;

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Streaming: GET/POST/DELETE {}", self.config.stream_path);
        info!("  → Stateless: POST {}", self.config.stateless_path);
        info!("  → Health:    GET /health");
        info!(
            "Idle streaming sessions close after {}s",
            self.config.session_idle_timeout.as_secs_f64()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("HTTP transport finished");
        Ok(())
    }

    fn validate(&self) -> TransportResult<()> {
        if self.config.session_idle_timeout.is_zero() {
            return Err(TransportError::config(
                "session idle timeout must be greater than zero",
            ));
        }

        let paths = [&self.config.stream_path, &self.config.stateless_path];
        for path in paths {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(TransportError::config(format!(
                    "endpoint path '{}' must start with '/' and not be the root",
                    path
                )));
            }
            if path == "/health" {
                return Err(TransportError::config("'/health' is reserved"));
            }
        }
        if self.config.stream_path == self.config.stateless_path {
            return Err(TransportError::config(format!(
                "streaming and stateless endpoints share the path '{}'",
                self.config.stream_path
            )));
        }
        Ok(())
    }
}

/// Wrap the session factory in an rmcp Streamable HTTP service.
///
/// `idle_timeout` bounds how long a stateful session survives without
/// traffic, so a client that vanishes without `DELETE` still releases it.
fn session_service(
    factory: SessionFactory,
    stateful_mode: bool,
    idle_timeout: Option<Duration>,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    let session_manager = LocalSessionManager {
        session_config: SessionConfig {
            keep_alive: idle_timeout,
            ..Default::default()
        },
        ..Default::default()
    };

    StreamableHttpService::new(
        move || Ok(factory.create()),
        Arc::new(session_manager),
        StreamableHttpServerConfig {
            stateful_mode,
            ..Default::default()
        },
    )
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let server = &state.factory.config().server;
    Json(serde_json::json!({
        "name": server.name,
        "version": server.version,
        "transport": "Streamable HTTP",
        "endpoints": {
            "streaming": state.config.stream_path,
            "stateless": state.config.stateless_path,
            "health": "/health"
        },
        "tools": crate::domains::tools::ToolRegistry::tool_names()
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "activeSessions": state.factory.active_sessions()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::upstream::CoinGeckoClient;
    use crate::core::upstream::testing::{MockUpstream, Reply, closed_port_client};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SESSION_HEADER: &str = "mcp-session-id";

    fn factory() -> SessionFactory {
        factory_with(closed_port_client())
    }

    fn factory_with(client: CoinGeckoClient) -> SessionFactory {
        SessionFactory::with_client(Arc::new(Config::default()), Arc::new(client))
    }

    fn mcp_request(
        method: Method,
        uri: &str,
        session: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ACCEPT, "application/json, text/event-stream")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(id) = session {
            builder = builder.header(SESSION_HEADER, id);
        }
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        builder.body(body).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    /// JSON-RPC messages carried in the `data:` lines of an SSE body.
    async fn sse_messages(response: Response) -> Vec<Value> {
        let bytes = tokio::time::timeout(
            Duration::from_secs(5),
            axum::body::to_bytes(response.into_body(), usize::MAX),
        )
        .await
        .expect("SSE body did not finish")
        .unwrap();

        String::from_utf8(bytes.to_vec())
            .unwrap()
            .lines()
            .filter_map(|line| line.strip_prefix("data:"))
            .map(str::trim)
            .filter(|data| !data.is_empty())
            .map(|data| serde_json::from_str(data).unwrap())
            .collect()
    }

    /// Poll until the factory reports `expected` live sessions or give up.
    async fn settle(factory: &SessionFactory, expected: usize) -> usize {
        for _ in 0..100 {
            if factory.active_sessions() == expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        factory.active_sessions()
    }

    fn tool_call(name: &str, arguments: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        })
    }

    fn initialize() -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": { "name": "http-test", "version": "0.0.0" }
            }
        })
    }

    /// Open a streaming session and return its id.
    async fn open_stream_session(app: &Router) -> String {
        let response = send(
            app,
            mcp_request(Method::POST, "/sse", None, Some(initialize())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let session_id = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("streaming endpoint issues a session id");

        let messages = sse_messages(response).await;
        assert_eq!(messages[0]["result"]["serverInfo"]["name"], "coingecko-mcp-server");

        let initialized = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
        let response = send(
            app,
            mcp_request(Method::POST, "/sse", Some(&session_id), Some(initialized)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        session_id
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_sessions() {
        let factory = factory();
        let app = HttpTransport::new(HttpConfig::default())
            .router(factory.clone())
            .unwrap();

        let _session = factory.create();
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["activeSessions"], 1);
    }

    #[tokio::test]
    async fn test_root_lists_endpoints_and_tools() {
        let config = HttpConfig {
            stream_path: "/stream".to_string(),
            stateless_path: "/rpc".to_string(),
            ..HttpConfig::default()
        };
        let app = HttpTransport::new(config).router(factory()).unwrap();

        let (status, body) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["endpoints"]["streaming"], "/stream");
        assert_eq!(body["endpoints"]["stateless"], "/rpc");
        assert_eq!(body["tools"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_rejects_shared_endpoint_path() {
        let config = HttpConfig {
            stream_path: "/mcp".to_string(),
            stateless_path: "/mcp".to_string(),
            ..HttpConfig::default()
        };
        let err = HttpTransport::new(config).router(factory()).unwrap_err();
        assert!(matches!(err, TransportError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_zero_idle_timeout() {
        let config = HttpConfig {
            session_idle_timeout: Duration::ZERO,
            ..HttpConfig::default()
        };
        assert!(HttpTransport::new(config).router(factory()).is_err());
    }

    #[tokio::test]
    async fn test_stateless_call_relays_upstream_body() {
        let body = json!({"gecko_says": "(V3) To the Moon!"});
        let upstream = MockUpstream::spawn(Reply::Fixed(body)).await;
        let factory = factory_with(upstream.client(None));
        let app = HttpTransport::new(HttpConfig::default())
            .router(factory.clone())
            .unwrap();

        let response = send(
            &app,
            mcp_request(
                Method::POST,
                "/mcp",
                None,
                Some(tool_call("getSupportedCurrencies", json!({}))),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SESSION_HEADER).is_none());

        let messages = sse_messages(response).await;
        let content = messages[0]["result"]["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "text");
        let text: Value = serde_json::from_str(content[0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(text["gecko_says"], "(V3) To the Moon!");
        assert_eq!(upstream.hits(), 1);

        assert_eq!(settle(&factory, 0).await, 0);
    }

    #[tokio::test]
    async fn test_stateless_rejects_invalid_arguments_without_upstream_call() {
        let upstream = MockUpstream::spawn(Reply::Echo).await;
        let factory = factory_with(upstream.client(None));
        let app = HttpTransport::new(HttpConfig::default())
            .router(factory.clone())
            .unwrap();

        let calls = [
            tool_call("getPublicCompaniesHoldings", json!({"coin_id": "solana"})),
            tool_call("getCoinOHLCChart", json!({"id": "bitcoin", "days": "2"})),
            tool_call("getCoinHistoricalChart", json!({"days": "30"})),
        ];
        for call in calls {
            let response = send(&app, mcp_request(Method::POST, "/mcp", None, Some(call))).await;
            let messages = sse_messages(response).await;
            assert_eq!(messages[0]["error"]["code"], -32602, "{}", messages[0]);
        }

        assert_eq!(upstream.hits(), 0);
        assert_eq!(settle(&factory, 0).await, 0);
    }

    #[tokio::test]
    async fn test_streaming_session_released_on_delete() {
        let factory = factory();
        let app = HttpTransport::new(HttpConfig::default())
            .router(factory.clone())
            .unwrap();

        let session_id = open_stream_session(&app).await;
        assert_eq!(factory.active_sessions(), 1);

        let response = send(
            &app,
            mcp_request(Method::DELETE, "/sse", Some(&session_id), None),
        )
        .await;
        assert!(response.status().is_success());
        assert_eq!(settle(&factory, 0).await, 0);

        // The id is gone; the endpoint no longer accepts it.
        let ping = json!({ "jsonrpc": "2.0", "id": 2, "method": "ping" });
        let response = send(
            &app,
            mcp_request(Method::POST, "/sse", Some(&session_id), Some(ping)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_silent_streaming_session_is_released() {
        let factory = factory();
        let config = HttpConfig {
            session_idle_timeout: Duration::from_millis(100),
            ..HttpConfig::default()
        };
        let app = HttpTransport::new(config).router(factory.clone()).unwrap();

        open_stream_session(&app).await;
        drop(app);

        assert_eq!(settle(&factory, 0).await, 0);
    }

    #[test]
    fn test_rejects_root_endpoint_path() {
        let config = HttpConfig {
            stateless_path: "/".to_string(),
            ..HttpConfig::default()
        };
        assert!(HttpTransport::new(config).router(factory()).is_err());
    }
}
