//! Provider backends and completion dispatcher
//!
//! This crate owns everything between an incoming `(prompt, model)` pair and
//! the normalized completion result: the routing table, the per-vendor
//! backends, the credential registry and the dispatcher that ties them
//! together.
//!
//! # Architecture
//!
//! ```text
//! Dispatcher (routing, validation, normalization)
//!     └── ProviderRegistry (built once at startup, credential-gated)
//!         └── backends:
//!             ├── OpenAiCompatibleBackend (OpenAI, DeepSeek chat + reasoner)
//!             ├── AnthropicBackend
//!             └── GeminiBackend
//! ```
//!
//! Exactly one backend is selected per request; there is no fan-out and no
//! fallback across providers. Routing is a pure function of the model
//! identifier, so the same identifier always resolves to the same
//! provider/upstream-model pair.

pub mod dispatcher;
pub mod external;
pub mod mock;
pub mod models;
pub mod registry;
pub mod routing;

// Re-export commonly used types for convenience
pub use dispatcher::Dispatcher;
pub use mock::MockBackend;
pub use models::{CompletionRequest, CompletionResult, DispatchError, RawCompletion, TokenUsage};
pub use registry::ProviderRegistry;
pub use routing::{
    resolve_model, MatchRule, ModelDescriptor, ProviderKind, RouteEntry, Vendor, DEFAULT_MODEL,
    ROUTING_TABLE,
};

// External backend exports
pub use external::{
    AnthropicBackend, BackendConfig, GeminiBackend, OpenAiCompatibleBackend, ProviderBackend,
};
