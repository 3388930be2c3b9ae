//! The completion dispatcher
//!
//! Owns the whole request lifecycle: validate, resolve, credential-check,
//! invoke the backend, normalize. Every failure comes back as exactly one
//! `DispatchError`; nothing escapes this boundary as a panic or a raw
//! vendor error.

use crate::models::{CompletionRequest, CompletionResult, DispatchError};
use crate::registry::ProviderRegistry;
use crate::routing::resolve_model;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Dispatcher {
    registry: Arc<ProviderRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatch one completion request to its resolved provider
    ///
    /// Stateless and side-effect free apart from the single outbound call;
    /// no retries, no caching. The credential check happens before any
    /// network I/O so a misconfigured provider fails fast.
    pub async fn dispatch(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, DispatchError> {
        if request.prompt.is_empty() {
            return Err(DispatchError::InvalidRequest(
                "prompt must be a non-empty string".to_string(),
            ));
        }

        let descriptor = resolve_model(&request.model)
            .ok_or_else(|| DispatchError::UnsupportedModel(request.model.clone()))?;
        let vendor = descriptor.kind.vendor();

        let handle = self
            .registry
            .handle(vendor)
            .ok_or_else(|| DispatchError::ProviderUnavailable(vendor.name().to_string()))?;

        debug!(
            model = %request.model,
            provider = vendor.name(),
            upstream_model = %descriptor.upstream_model,
            "dispatching completion"
        );

        let raw = handle
            .backend
            .complete(&handle.config, &descriptor.upstream_model, &request.prompt)
            .await
            .map_err(|e| {
                warn!(provider = vendor.name(), error = %e, "completion failed");
                e
            })?;

        Ok(CompletionResult {
            text: raw.text,
            usage: raw.usage,
            provider: vendor.name().to_string(),
        })
    }
}
