//! Anthropic backend implementation
//!
//! Talks to Anthropic's Messages API. The response `content` is a sequence
//! of typed blocks; only a leading text block is usable for a plain
//! completion, anything else (tool_use, image, ...) is a shape error rather
//! than silently-empty text.

use super::backend::{BackendConfig, ProviderBackend};
use crate::models::{extract_error_message, DispatchError, RawCompletion, TokenUsage};
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Client};
use serde::{Deserialize, Serialize};

/// Default Anthropic API version
const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound Anthropic requires on every request
const DEFAULT_MAX_TOKENS: i64 = 1024;

/// Anthropic backend
pub struct AnthropicBackend {
    client: Client,
}

impl AnthropicBackend {
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    fn build_headers(&self, config: &BackendConfig) -> Result<reqwest::header::HeaderMap, String> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        // Anthropic uses x-api-key rather than a bearer token
        let header_value = HeaderValue::from_str(&config.api_key)
            .map_err(|e| format!("Invalid API key format: {e}"))?;
        headers.insert("x-api-key", header_value);

        let version = config
            .extra
            .get("version")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_ANTHROPIC_VERSION);
        if let Ok(value) = HeaderValue::from_str(version) {
            headers.insert("anthropic-version", value);
        }

        Ok(headers)
    }
}

impl Default for AnthropicBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: i64,
    messages: Vec<MessagesRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct MessagesRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    usage: Option<AnthropicUsage>,
}

/// Typed content block from the Messages API
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    type_: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    #[serde(default)]
    input_tokens: i64,
    #[serde(default)]
    output_tokens: i64,
}

#[async_trait]
impl ProviderBackend for AnthropicBackend {
    fn backend_type(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(
        &self,
        config: &BackendConfig,
        model: &str,
        prompt: &str,
    ) -> Result<RawCompletion, DispatchError> {
        let url = format!("{}/messages", config.base_url);

        let body = MessagesRequest {
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![MessagesRequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let headers = self
            .build_headers(config)
            .map_err(DispatchError::UpstreamFailure)?;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| DispatchError::UpstreamFailure(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response body: {e}"));
            return Err(DispatchError::UpstreamFailure(format!(
                "upstream returned {status}: {}",
                extract_error_message(&error_text)
            )));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::UpstreamFailure(format!("Failed to parse response: {e}")))?;

        let block = messages_response.content.into_iter().next().ok_or_else(|| {
            DispatchError::UnexpectedResponseShape("response has no content blocks".to_string())
        })?;

        // Only a text block is usable here. The block payload itself is
        // deliberately not included in the error: it never reaches the caller.
        if block.type_ != "text" {
            return Err(DispatchError::UnexpectedResponseShape(format!(
                "first content block has type \"{}\", expected \"text\"",
                block.type_
            )));
        }

        let text = block.text.ok_or_else(|| {
            DispatchError::UnexpectedResponseShape("text block carries no text".to_string())
        })?;

        let usage = messages_response.usage.map(|u| TokenUsage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
            total_tokens: u.input_tokens + u.output_tokens,
        });

        Ok(RawCompletion { text, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_build_headers() {
        let backend = AnthropicBackend::new();
        let config = BackendConfig::new("https://api.anthropic.com/v1", "sk-ant-test");

        let headers = backend.build_headers(&config).unwrap();

        assert_eq!(
            headers.get("x-api-key").unwrap().to_str().unwrap(),
            "sk-ant-test"
        );
        assert_eq!(
            headers.get("anthropic-version").unwrap().to_str().unwrap(),
            DEFAULT_ANTHROPIC_VERSION
        );
        assert!(headers.get("Authorization").is_none());
    }

    #[test]
    fn test_build_headers_version_override() {
        let backend = AnthropicBackend::new();
        let mut config = BackendConfig::new("https://api.anthropic.com/v1", "sk-ant-test");
        config
            .extra
            .insert("version".to_string(), "2024-01-01".to_string());

        let headers = backend.build_headers(&config).unwrap();
        assert_eq!(
            headers.get("anthropic-version").unwrap().to_str().unwrap(),
            "2024-01-01"
        );
    }

    #[tokio::test]
    async fn test_complete_normalizes_text_block() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .header("x-api-key", "sk-ant-test")
                    .json_body_partial(r#"{"model": "claude-3-5-sonnet-20241022"}"#);
                then.status(200).json_body(serde_json::json!({
                    "id": "msg_123",
                    "type": "message",
                    "role": "assistant",
                    "content": [{"type": "text", "text": "hi there"}],
                    "usage": {"input_tokens": 10, "output_tokens": 4}
                }));
            })
            .await;

        let backend = AnthropicBackend::new();
        let config = BackendConfig::new(server.url("/v1"), "sk-ant-test");

        let result = backend
            .complete(&config, "claude-3-5-sonnet-20241022", "hello")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.text, "hi there");
        let usage = result.usage.unwrap();
        assert_eq!(usage.input_tokens, 10);
        assert_eq!(usage.output_tokens, 4);
        assert_eq!(usage.total_tokens, 14);
    }

    #[tokio::test]
    async fn test_complete_rejects_non_text_first_block() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(serde_json::json!({
                    "content": [{
                        "type": "tool_use",
                        "id": "toolu_123",
                        "name": "get_weather",
                        "input": {"location": "Berlin"}
                    }]
                }));
            })
            .await;

        let backend = AnthropicBackend::new();
        let config = BackendConfig::new(server.url("/v1"), "sk-ant-test");

        let err = backend
            .complete(&config, "claude-3-5-sonnet-20241022", "hello")
            .await
            .unwrap_err();

        match err {
            DispatchError::UnexpectedResponseShape(msg) => {
                assert!(msg.contains("tool_use"));
                // The block payload must not leak into the error
                assert!(!msg.contains("get_weather"));
                assert!(!msg.contains("Berlin"));
            }
            other => panic!("Expected UnexpectedResponseShape, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(serde_json::json!({"content": []}));
            })
            .await;

        let backend = AnthropicBackend::new();
        let config = BackendConfig::new(server.url("/v1"), "sk-ant-test");

        let err = backend
            .complete(&config, "claude-3-5-sonnet-20241022", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnexpectedResponseShape(_)));
    }

    #[tokio::test]
    async fn test_complete_maps_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(529).json_body(serde_json::json!({
                    "type": "error",
                    "error": {"type": "overloaded_error", "message": "Overloaded"}
                }));
            })
            .await;

        let backend = AnthropicBackend::new();
        let config = BackendConfig::new(server.url("/v1"), "sk-ant-test");

        let err = backend
            .complete(&config, "claude-3-5-sonnet-20241022", "hello")
            .await
            .unwrap_err();
        match err {
            DispatchError::UpstreamFailure(msg) => assert!(msg.contains("Overloaded")),
            other => panic!("Expected UpstreamFailure, got {other:?}"),
        }
    }
}
