//! Mock backend for testing
//!
//! Scripts a single success or failure result and records how it was called,
//! so dispatcher tests can assert both normalization and the
//! no-network-call-on-disabled-provider property without real HTTP.

use crate::external::{BackendConfig, ProviderBackend};
use crate::models::{DispatchError, RawCompletion, TokenUsage};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockBackend {
    result: Result<RawCompletion, DispatchError>,
    calls: AtomicUsize,
    last_model: Mutex<Option<String>>,
}

impl MockBackend {
    /// Mock that succeeds with the given text and no usage
    pub fn returning(text: &str) -> Self {
        Self {
            result: Ok(RawCompletion {
                text: text.to_string(),
                usage: None,
            }),
            calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
        }
    }

    /// Mock that succeeds with text and usage counts
    pub fn returning_with_usage(text: &str, usage: TokenUsage) -> Self {
        Self {
            result: Ok(RawCompletion {
                text: text.to_string(),
                usage: Some(usage),
            }),
            calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
        }
    }

    /// Mock that fails with the given error
    pub fn failing(error: DispatchError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
        }
    }

    /// Number of times `complete` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Upstream model name of the most recent call
    pub fn last_model(&self) -> Option<String> {
        self.last_model.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderBackend for MockBackend {
    fn backend_type(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _config: &BackendConfig,
        model: &str,
        _prompt: &str,
    ) -> Result<RawCompletion, DispatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_model.lock().unwrap() = Some(model.to_string());
        self.result.clone()
    }
}
