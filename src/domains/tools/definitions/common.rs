//! Common utilities shared across the market-data tools.
//!
//! Every tool follows the same shape: parse parameters into a typed struct,
//! build an [`UpstreamRequest`], fetch it, and wrap the outcome with
//! [`relay`]. Parameter errors are the only failures that escape as protocol
//! errors; upstream failures become an `{"error": ...}` payload.

use std::future::Future;

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::core::upstream::{UpstreamError, UpstreamResult};
use crate::domains::tools::ToolError;

/// Default quote currency for price and chart tools.
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Parameters for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// `serde` default for quote-currency fields.
pub fn default_vs_currency() -> String {
    DEFAULT_VS_CURRENCY.to_string()
}

/// Validate raw tool arguments against a typed parameter struct.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()).into())
}

/// Tool metadata with a schema derived from the parameter type.
pub fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Await an upstream call and wrap the outcome as a single text block.
///
/// Success yields the JSON body serialized as text. Failure yields
/// `{"error": "<label>: <reason>"}`; it is still a successful tool result.
pub async fn relay<F>(label: &str, call: F) -> CallToolResult
where
    F: Future<Output = UpstreamResult<Value>>,
{
    relay_with(label, call, render_json).await
}

/// Like [`relay`], with a custom rendering of the success body.
pub async fn relay_with<F, R>(label: &str, call: F, render: R) -> CallToolResult
where
    F: Future<Output = UpstreamResult<Value>>,
    R: FnOnce(Value) -> String,
{
    match call.await {
        Ok(body) => text_result(render(body)),
        Err(e) => {
            warn!("{}: {}", label, e);
            text_result(error_payload(label, &e))
        }
    }
}

/// Serialize an upstream body for the text payload.
pub fn render_json(body: Value) -> String {
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
}

/// Serialized `{"error": ...}` object for a failed upstream call.
pub fn error_payload(label: &str, err: &UpstreamError) -> String {
    serde_json::json!({ "error": format!("{}: {}", label, err) }).to_string()
}

/// Create a success result with text content.
pub fn text_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Text of the single content block of a result.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    assert_eq!(result.content.len(), 1, "expected exactly one content block");
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

/// Error message of an `{"error": ...}` payload, if the result is one.
#[cfg(test)]
pub(crate) fn result_error(result: &CallToolResult) -> Option<String> {
    serde_json::from_str::<Value>(&result_text(result))
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        id: String,
        #[serde(default = "default_vs_currency")]
        vs_currency: String,
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_parse_params_applies_defaults() {
        let params: Sample = parse_params(args(json!({"id": "bitcoin"}))).unwrap();
        assert_eq!(params.vs_currency, "usd");
    }

    #[test]
    fn test_parse_params_reports_invalid_params() {
        let err = parse_params::<Sample>(args(json!({"vs_currency": "eur"}))).unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("id"));
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        assert!(parse_params::<NoParams>(JsonObject::new()).is_ok());
    }

    #[tokio::test]
    async fn test_relay_success_is_serialized_body() {
        let body = json!({"gecko_says": "(V3) To the Moon!"});
        let result = relay("label", async { Ok(body.clone()) }).await;

        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), body);
    }

    #[tokio::test]
    async fn test_relay_failure_is_error_object() {
        let result = relay("Failed to fetch things", async {
            Err(UpstreamError::Status {
                path: "/things".to_string(),
                status: 503,
            })
        })
        .await;

        assert_eq!(result.is_error, Some(false));
        let message = result_error(&result).unwrap();
        assert!(message.starts_with("Failed to fetch things"));
        assert!(message.contains("503"));
    }

    #[tokio::test]
    async fn test_relay_with_custom_render() {
        let result = relay_with("label", async { Ok(json!({})) }, |_| "fixed".to_string()).await;
        assert_eq!(result_text(&result), "fixed");
    }
}
