//! External backends for third-party AI providers
//!
//! Each backend handles the API-specific translation between the gateway's
//! uniform `(prompt, upstream model)` call and the vendor's native request
//! and response shapes. Vendor-shape churn stays inside the backend; the
//! dispatcher never touches vendor JSON.

pub mod anthropic;
pub mod backend;
pub mod gemini;
pub mod openai_compatible;

pub use anthropic::AnthropicBackend;
pub use backend::{BackendConfig, ProviderBackend};
pub use gemini::GeminiBackend;
pub use openai_compatible::OpenAiCompatibleBackend;
