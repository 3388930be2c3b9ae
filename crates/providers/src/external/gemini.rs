//! Google Gemini backend implementation
//!
//! Talks to the generateContent endpoint. The key travels as a query
//! parameter rather than a header, and the response nests text under
//! candidates → content → parts. Gemini surfaces no token usage through this
//! call, so `usage` stays `None`.

use super::backend::{BackendConfig, ProviderBackend};
use crate::models::{extract_error_message, DispatchError, RawCompletion};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini backend
pub struct GeminiBackend {
    client: Client,
}

impl GeminiBackend {
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for GeminiBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[async_trait]
impl ProviderBackend for GeminiBackend {
    fn backend_type(&self) -> &'static str {
        "gemini"
    }

    async fn complete(
        &self,
        config: &BackendConfig,
        model: &str,
        prompt: &str,
    ) -> Result<RawCompletion, DispatchError> {
        let url = format!("{}/models/{model}:generateContent", config.base_url);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", config.api_key.as_str())])
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

        let generate_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::UpstreamFailure(format!("Failed to parse response: {e}")))?;

        let candidate = generate_response.candidates.into_iter().next().ok_or_else(|| {
            DispatchError::UnexpectedResponseShape("response has no candidates".to_string())
        })?;

        let parts = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default();

        // Multi-part candidates concatenate into one text. A part set with
        // no text at all is a shape error; a present-but-empty text part is
        // a legitimate empty completion.
        let texts: Vec<String> = parts.into_iter().filter_map(|part| part.text).collect();
        if texts.is_empty() {
            return Err(DispatchError::UnexpectedResponseShape(
                "candidate carries no text parts".to_string(),
            ));
        }

        Ok(RawCompletion {
            text: texts.join(""),
            usage: None,
        })
    }
}
