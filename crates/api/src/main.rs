use api::{build_router, AppState};
use config::{GatewayConfig, LoggingConfig};
use providers::ProviderRegistry;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load configuration first to get logging settings
    let config = GatewayConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Application cannot start without a valid configuration.");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    // Build the provider registry once; credentials are not re-read per request
    let registry = Arc::new(ProviderRegistry::from_settings(&config.providers));
    let enabled = registry.enabled_vendors();
    if enabled.is_empty() {
        tracing::warn!(
            "No provider credentials configured; every completion will fail as unavailable"
        );
    } else {
        tracing::info!(providers = ?enabled, "Enabled providers");
    }

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    tracing::info!(address = %bind_address, "Server started successfully");
    tracing::info!("API Endpoints:");
    tracing::info!("  - POST /v1/completion (Completion dispatch)");
    tracing::info!("  - GET /v1/models (Routing table)");
    tracing::info!("  - GET /health (Health & enabled providers)");
    tracing::info!("  - GET /api-docs/openapi.json (OpenAPI spec)");

    axum::serve(listener, app).await.unwrap();
}

fn init_tracing(logging_config: &LoggingConfig) {
    let filter = logging_config.level.clone();

    match logging_config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}
