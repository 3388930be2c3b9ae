//! HTTP request/response models for the gateway API

use providers::{CompletionResult, TokenUsage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a completion request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompletionRequestBody {
    /// The prompt to complete; must be non-empty
    #[serde(default)]
    pub prompt: String,
    /// Logical model identifier; defaults to the baseline model when omitted
    pub model: Option<String>,
}

/// Successful completion response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompletionResponseBody {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Human-readable vendor name, e.g. "OpenAI"
    pub provider: String,
}

impl From<CompletionResult> for CompletionResponseBody {
    fn from(result: CompletionResult) -> Self {
        Self {
            text: result.text,
            usage: result.usage.map(Usage::from),
            provider: result.provider,
        }
    }
}

/// Token usage as reported by the upstream provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Usage {
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub total_tokens: i64,
}

impl From<TokenUsage> for Usage {
    fn from(usage: TokenUsage) -> Self {
        Self {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Uniform error body: a human-readable summary plus optional diagnostics.
/// Stack traces and credentials never appear here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Vendors with credentials configured
    pub providers: Vec<String>,
}

/// Routing table listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelInfo>,
}

/// One routing table entry as exposed to callers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    /// Exact identifier, or the prefix for prefix rules
    pub id: String,
    /// "exact" or "prefix"
    pub matching: String,
    /// Human-readable vendor name
    pub provider: String,
    /// Whether the vendor's credential is configured
    pub enabled: bool,
}
