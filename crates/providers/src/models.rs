//! Shared data types for the dispatch pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::DEFAULT_MODEL;

/// An incoming completion request, immutable once constructed
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
}

impl CompletionRequest {
    /// Build a request, substituting the baseline model when none was given
    pub fn new(prompt: impl Into<String>, model: Option<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

/// Token accounting as reported by the upstream provider
///
/// Not every vendor surfaces this (Gemini does not), so it stays optional
/// all the way to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub total_tokens: i64,
}

/// A backend response before the dispatcher stamps the vendor name on it
#[derive(Debug, Clone)]
pub struct RawCompletion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// The normalized result returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResult {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Human-readable vendor name, e.g. "OpenAI"
    pub provider: String,
}

/// Uniform failure taxonomy for the dispatch pipeline
///
/// Every failure path produces exactly one of these; nothing propagates past
/// the dispatcher boundary as an unhandled fault. `ProviderUnavailable` is
/// deliberately distinct from `UpstreamFailure` so operators can tell "not
/// configured" from "upstream is down".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),
    #[error("Provider {0} is not configured")]
    ProviderUnavailable(String),
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),
}

/// Pull a human-readable message out of an upstream error body
///
/// Providers wrap their errors differently ({"error": {"message": ...}},
/// {"error": "..."}, {"message": "..."}); fall back to the raw body when
/// none of those shapes match.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("error").and_then(|e| e.as_str()))
            .or_else(|| value.get("message").and_then(|m| m.as_str()))
        {
            return message.to_string();
        }
    }
    body.trim().to_string()
}
