// Configuration Management
//
// This crate handles all configuration loading for the completion gateway.
// Everything is sourced from environment variables exactly once at startup;
// nothing here is re-read per request.
//
// Provider credentials are optional on purpose: a missing key disables that
// provider instead of failing startup, so a partially configured deployment
// still serves the providers it has keys for.

pub mod types;

// Re-export all configuration types
pub use types::*;

/// Main configuration loading interface
impl GatewayConfig {
    /// Load the full gateway configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            providers: ProviderSettings::from_env(),
        })
    }
}
