//! OpenAI-compatible backend implementation
//!
//! This backend handles providers that use OpenAI's chat-completion API
//! format. The gateway routes both OpenAI itself and the two DeepSeek
//! variants through it; only the base URL and upstream model name differ.

use super::backend::{BackendConfig, ProviderBackend};
use crate::models::{extract_error_message, DispatchError, RawCompletion, TokenUsage};
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Client};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible backend
pub struct OpenAiCompatibleBackend {
    client: Client,
}

impl OpenAiCompatibleBackend {
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

        let auth_value = format!("Bearer {}", config.api_key);
        let header_value = HeaderValue::from_str(&auth_value)
            .map_err(|e| format!("Invalid API key format: {e}"))?;
        headers.insert("Authorization", header_value);

        Ok(headers)
    }
}

impl Default for OpenAiCompatibleBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: i64,
    #[serde(default)]
    completion_tokens: i64,
    #[serde(default)]
    total_tokens: i64,
}

#[async_trait]
impl ProviderBackend for OpenAiCompatibleBackend {
    fn backend_type(&self) -> &'static str {
        "openai_compatible"
    }

    async fn complete(
        &self,
        config: &BackendConfig,
        model: &str,
        prompt: &str,
    ) -> Result<RawCompletion, DispatchError> {
        let url = format!("{}/chat/completions", config.base_url);

        let body = ChatRequest {
            model,
            messages: vec![ChatRequestMessage {
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

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::UpstreamFailure(format!("Failed to parse response: {e}")))?;

        // Text lives at the first choice's message content
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DispatchError::UnexpectedResponseShape("response has no choices".to_string()))?;

        let text = choice.message.content.ok_or_else(|| {
            DispatchError::UnexpectedResponseShape("first choice carries no message content".to_string())
        })?;

        let usage = chat_response.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(RawCompletion { text, usage })
    }
}
