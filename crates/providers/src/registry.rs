//! Credential-gated provider registry
//!
//! Built once at startup from environment-derived settings and injected into
//! the dispatcher. A vendor whose credential is absent simply has no entry:
//! enabled/disabled state is a registry lookup, never re-derived per request.
//! The registry is read-only after construction, so it is shared across
//! concurrent requests without locking.

use crate::external::{
    AnthropicBackend, BackendConfig, GeminiBackend, OpenAiCompatibleBackend, ProviderBackend,
};
use crate::routing::Vendor;
use config::ProviderSettings;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered provider: its backend plus the connection config for it
#[derive(Clone)]
pub struct ProviderHandle {
    pub backend: Arc<dyn ProviderBackend>,
    pub config: BackendConfig,
}

/// Registry of enabled providers, keyed by vendor
pub struct ProviderRegistry {
    slots: HashMap<Vendor, ProviderHandle>,
}

impl ProviderRegistry {
    /// Registry with no providers enabled
    pub fn empty() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build the registry from provider settings
    ///
    /// Only vendors with a credential present get an entry. The
    /// OpenAI-compatible backend is shared between OpenAI and DeepSeek;
    /// they differ only in base URL and credential.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let mut registry = Self::empty();
        let openai_compatible: Arc<dyn ProviderBackend> = Arc::new(OpenAiCompatibleBackend::new());

        if let Some(key) = &settings.openai_api_key {
            registry.register(
                Vendor::OpenAi,
                openai_compatible.clone(),
                BackendConfig::new(settings.openai_base_url.clone(), key.clone()),
            );
        }
        if let Some(key) = &settings.deepseek_api_key {
            registry.register(
                Vendor::DeepSeek,
                openai_compatible,
                BackendConfig::new(settings.deepseek_base_url.clone(), key.clone()),
            );
        }
        if let Some(key) = &settings.gemini_api_key {
            registry.register(
                Vendor::Google,
                Arc::new(GeminiBackend::new()),
                BackendConfig::new(settings.gemini_base_url.clone(), key.clone()),
            );
        }
        if let Some(key) = &settings.anthropic_api_key {
            registry.register(
                Vendor::Anthropic,
                Arc::new(AnthropicBackend::new()),
                BackendConfig::new(settings.anthropic_base_url.clone(), key.clone()),
            );
        }

        registry
    }

    /// Register (or replace) the handle for a vendor
    pub fn register(
        &mut self,
        vendor: Vendor,
        backend: Arc<dyn ProviderBackend>,
        config: BackendConfig,
    ) {
        self.slots.insert(vendor, ProviderHandle { backend, config });
    }

    /// Look up the handle for a vendor; `None` means disabled
    pub fn handle(&self, vendor: Vendor) -> Option<&ProviderHandle> {
        self.slots.get(&vendor)
    }

    pub fn is_enabled(&self, vendor: Vendor) -> bool {
        self.slots.contains_key(&vendor)
    }

    /// Names of enabled vendors, in stable declaration order
    pub fn enabled_vendors(&self) -> Vec<&'static str> {
        Vendor::ALL
            .iter()
            .filter(|v| self.is_enabled(**v))
            .map(|v| v.name())
            .collect()
    }
}
