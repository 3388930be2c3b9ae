//! Backend trait for external provider implementations

use crate::models::{DispatchError, RawCompletion};
use async_trait::async_trait;
use std::collections::HashMap;

/// Configuration for a backend connection
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the provider API
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Provider-specific extra configuration (e.g., anthropic version)
    pub extra: HashMap<String, String>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            extra: HashMap::new(),
        }
    }
}

/// Internal backend trait for different API formats
///
/// Each implementation translates the uniform prompt call into the vendor's
/// native format, performs the single HTTP request, and normalizes the
/// response back into a `RawCompletion`. Failures come back as
/// `DispatchError` only; backends never panic across this boundary.
#[async_trait]
pub trait ProviderBackend: Send + Sync {
    /// Backend type identifier (e.g., "openai_compatible", "anthropic")
    fn backend_type(&self) -> &'static str;

    /// Performs one completion request against the upstream provider
    async fn complete(
        &self,
        config: &BackendConfig,
        model: &str,
        prompt: &str,
    ) -> Result<RawCompletion, DispatchError>;
}
